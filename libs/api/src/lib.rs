use std::sync::Arc;

use anyhow::Context as _;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use registration::RegistrationService;
use repository::Repository;
use toml::{map::Map, Value};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub mod attendee;
pub mod healthz;
pub mod not_found;
pub mod registration;
mod response;
pub mod validation;

pub enum ApiError {
    ValidationError(Vec<validation::FieldError>),
    ClientError(String),
    ServerError(String),
}

#[derive(Clone, Debug)]
pub struct ApiState {
    registration: RegistrationService,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(attendee::register_for_event, attendee::delete_attendee),
    components(schemas(
        attendee::request::RegisterForEventBody,
        attendee::response::RegisterForEventResp,
        response::ErrorResp,
        validation::FieldError,
    )),
    tags(
        (name = "attendees", description = "Event attendee registration API")
    )
)]
struct ApiDoc;

pub async fn serve(
    repository: Repository,
    config_name: &str,
) -> anyhow::Result<Router> {
    let config = load_config(config_name)?;

    app(repository, &config)
}

pub fn app(repository: Repository, config: &Config) -> anyhow::Result<Router> {
    info!(task = "start api serving");

    let state = Arc::new(ApiState {
        registration: RegistrationService::new(repository),
    });

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid allowed origin: {origin}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    // events
    let event_router = Router::new()
        .route("/:eventId/attendees", post(attendee::register_for_event))
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // attendees
    let attendee_router = Router::new()
        .route("/:id", delete(attendee::delete_attendee))
        .fallback(not_found::get_404)
        .with_state(state);

    let router = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .route("/healthz", get(healthz::get_health))
        .nest("/events", event_router)
        .nest("/attendees", attendee_router)
        .layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([Method::GET, Method::POST, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .fallback(not_found::get_404);

    Ok(router)
}

pub fn load_config(config_name: &str) -> anyhow::Result<Config> {
    let config = util::load_config(config_name)?;

    init_config(&config)
}

pub fn init_config(config: &Map<String, Value>) -> anyhow::Result<Config> {
    let api = config.get("api").context("failed to get api config")?;

    let port = api
        .get("port")
        .context("failed to load port config")?
        .as_integer()
        .context("failed to parse port config")?;

    let allowed_origins = api
        .get("allowed_origins")
        .context("failed to load allowed_origins config")?
        .as_array()
        .context("failed to parse allowed_origins config")?
        .iter()
        .map(|origin| {
            origin
                .as_str()
                .map(str::to_string)
                .context("failed to parse allowed_origins entry")
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(Config {
        port: u16::try_from(port).context("port is out of range")?,
        allowed_origins,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_init_config() {
        // Arrange
        let config = toml::from_str::<Map<String, Value>>(
            r#"
            [api]
            port = 8000
            allowed_origins = ["http://localhost:3000"]
            "#,
        )
        .unwrap();

        // Act
        let config = init_config(&config).unwrap();

        // Assert
        assert_eq!(config.port, 8000);
        assert_eq!(config.allowed_origins, ["http://localhost:3000"]);
    }

    #[test]
    fn test_init_config_rejects_bad_port() {
        let config = toml::from_str::<Map<String, Value>>(
            r#"
            [api]
            port = 70000
            allowed_origins = []
            "#,
        )
        .unwrap();

        assert!(init_config(&config).is_err());
    }
}

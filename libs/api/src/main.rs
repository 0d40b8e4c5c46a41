use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;
use repository::init_repository;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use util::{load_env, secret};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let secrets = load_env()?;
    let conn_string = secret(&secrets, "LOCAL_DATABASE_URL")?;
    let repository = init_repository(conn_string)
        .await
        .context("failed to init repository")?;

    let config = api::load_config("Config.toml")?;
    let router = api::app(repository, &config)?;

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    let listener = TcpListener::bind(&address).await?;
    info!(task = "listen", address = address.to_string());

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!(task = "shutdown");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(task = "install ctrl-c handler", error = e.to_string());
        std::future::pending::<()>().await;
    }
}

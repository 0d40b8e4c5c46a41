use attendee::AttendeeRepository;
use check_in::CheckInRepository;
use event::EventRepository;
use migration::Migrator;
use migration::MigratorTrait;
use response::IntoResponse;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, SqlErr};

mod active_models;
pub mod attendee;
pub mod check_in;
pub mod event;
mod response;

pub use response::Response;

/// Handle to the registration store. Cloning shares the same pool.
#[derive(Clone, Debug)]
pub struct Repository {
    pub event: EventRepository,
    pub attendee: AttendeeRepository,
    pub check_in: CheckInRepository,
}

impl Repository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            event: EventRepository::new(db.clone()),
            attendee: AttendeeRepository::new(db.clone()),
            check_in: CheckInRepository::new(db),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error(
        "in sea-orm crate from unsuccessful database operations: {}: {}",
        message,
        source
    )]
    InSeaOrmDbErr {
        message: String,
        source: sea_orm::DbErr,
    },
}

impl RepositoryError {
    /// True when the database rejected a write because of a unique key.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            RepositoryError::InSeaOrmDbErr { source, .. } => matches!(
                source.sql_err(),
                Some(SqlErr::UniqueConstraintViolation(_))
            ),
        }
    }
}

pub async fn init_repository(db_url: &str) -> Response<Repository> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(5)
        .min_connections(1)
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    init_repository_with(opt).await
}

/// Connects with caller-provided options and applies pending migrations.
pub async fn init_repository_with(opt: ConnectOptions) -> Response<Repository> {
    let db = Database::connect(opt)
        .await
        .into_response("in database connect")?;

    Migrator::up(&db, None)
        .await
        .into_response("in migrator up")?;

    Ok(Repository::new(db))
}

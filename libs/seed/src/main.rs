use anyhow::Context;
use repository::init_repository;
use tracing::info;
use util::{load_config, load_env, secret};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let secrets = load_env()?;
    let conn_string = secret(&secrets, "LOCAL_DATABASE_URL")?;

    let config = seed::init_config(&load_config("Config.toml")?)?;
    let repository = init_repository(conn_string)
        .await
        .context("failed to init repository")?;

    let report = seed::serve(&repository, &config).await?;

    info!(
        task = "seed complete",
        event_id = report.event_id,
        attendees = report.attendees,
        check_ins = report.check_ins
    );

    Ok(())
}

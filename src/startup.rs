//! Wiring the commands share at startup.

use std::{sync::Once, time::Duration};

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{config::Config, error::Error};

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "CHARTER_SEED_LOG";
const DEFAULT_LOG_FILTER: &str = "charter_seed=info";
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

static INIT: Once = Once::new();

/// Initialize logging to stderr, filtered by `CHARTER_SEED_LOG` (default `charter_seed=info`).
///
/// Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .with(filter)
            .init();
    });
}

/// Connect to the database
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(config.database_url()?);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;
    tracing::debug!("Connected to database");

    Ok(db)
}

/// Create every charter table that does not exist yet
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), Error> {
    use migration::{Migrator, MigratorTrait};

    Migrator::up(db, None).await?;
    tracing::info!("Migrations applied");

    Ok(())
}

/// Build the HTTP client used by the smoke checks
pub fn build_http_client() -> Result<reqwest::Client, Error> {
    let client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(HTTP_TIMEOUT)
        .build()?;

    Ok(client)
}

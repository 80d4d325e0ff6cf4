//! Error types for the charter seeder.
//!
//! Domain errors (configuration, seeding) live in their own modules and are aggregated with
//! the external library errors into [`Error`]. Per-row insert failures never surface here:
//! the populator logs and counts them, see [`retry`].

pub mod config;
pub mod retry;
pub mod seed;

use thiserror::Error;

use crate::error::{config::ConfigError, seed::SeedError};

/// Main error type for the charter seeder.
///
/// Uses `thiserror`'s `#[from]` conversions so that `?` lifts configuration, seeding,
/// database, HTTP and JSON errors into a single type handled by the CLI.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Seeding error (missing parents, schema drift, missing tables).
    #[error(transparent)]
    SeedError(#[from] SeedError),
    /// Database error (connection failures, query failures, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// HTTP client error raised while building the smoke-test client.
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
    /// JSON error (invalid request bodies supplied on the command line).
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}

impl Error {
    /// A hint printed after the error to help the operator fix their environment.
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            Self::ConfigError(err) => Some(err.remediation()),
            Self::DbErr(sea_orm::DbErr::Conn(_))
            | Self::DbErr(sea_orm::DbErr::ConnectionAcquire(_)) => Some(
                "check DATABASE_URL: the host must be reachable and the credentials must \
                 grant access to the charter tables",
            ),
            Self::SeedError(SeedError::TableMissing(_)) => {
                Some("run `charter-seed migrate` to create the charter tables")
            }
            Self::SeedError(SeedError::SchemaDrift { .. }) => Some(
                "run `charter-seed inspect` to compare the live columns with the expected ones",
            ),
            Self::HttpError(_) => Some("check API_BASE_URL and that the service is running"),
            _ => None,
        }
    }
}

/// Truncate an error message to at most `max_chars` characters for log output.
pub fn truncate_message(message: &str, max_chars: usize) -> String {
    match message.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &message[..cut]),
        None => message.to_string(),
    }
}

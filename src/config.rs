//! Environment-backed configuration shared by every command.

use std::{str::FromStr, time::Duration};

use crate::error::config::ConfigError;

/// Default minimum number of rows per table.
pub const DEFAULT_TARGET_COUNT: u64 = 20;
/// Default number of rows per insert statement.
pub const DEFAULT_BATCH_SIZE: usize = 5;
/// Default pause between insert batches, in milliseconds.
pub const DEFAULT_BATCH_DELAY_MS: u64 = 250;
/// Default schema inspected on Postgres.
pub const DEFAULT_DATABASE_SCHEMA: &str = "public";

/// Runtime configuration.
///
/// Connection strings and credentials are only ever read from the environment (or a `.env`
/// file loaded by the binary). Variables needed by a single command are optional here and
/// checked by the accessor that command uses.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `DATABASE_URL`: connection string of the hosted database
    pub database_url: Option<String>,
    /// `DATABASE_SCHEMA`: schema inspected on Postgres
    pub database_schema: String,
    /// `SEED_TARGET_COUNT`: minimum number of rows per table
    pub target_count: u64,
    /// `SEED_BATCH_SIZE`: rows per insert statement
    pub batch_size: usize,
    /// `SEED_BATCH_DELAY_MS`: pause between insert batches
    pub batch_delay: Duration,
    /// `API_BASE_URL`: base URL of the service under smoke test
    pub api_base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            database_schema: DEFAULT_DATABASE_SCHEMA.to_string(),
            target_count: DEFAULT_TARGET_COUNT,
            batch_size: DEFAULT_BATCH_SIZE,
            batch_delay: Duration::from_millis(DEFAULT_BATCH_DELAY_MS),
            api_base_url: None,
        }
    }
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let batch_size = parse_var(&get, "SEED_BATCH_SIZE")?.unwrap_or(defaults.batch_size);
        if batch_size == 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "SEED_BATCH_SIZE".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            database_url: get("DATABASE_URL"),
            database_schema: get("DATABASE_SCHEMA").unwrap_or(defaults.database_schema),
            target_count: parse_var(&get, "SEED_TARGET_COUNT")?.unwrap_or(defaults.target_count),
            batch_size,
            batch_delay: parse_var(&get, "SEED_BATCH_DELAY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.batch_delay),
            api_base_url: get("API_BASE_URL").map(|url| url.trim_end_matches('/').to_string()),
        })
    }

    /// The database connection string, required by every database command.
    pub fn database_url(&self) -> Result<&str, ConfigError> {
        self.database_url
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))
    }

    /// The base URL of the service under test, required by the smoke command.
    pub fn api_base_url(&self) -> Result<&str, ConfigError> {
        self.api_base_url
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("API_BASE_URL".to_string()))
    }
}

fn parse_var<T, F>(get: &F, var: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    get(var)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: var.to_string(),
                    reason: e.to_string(),
                })
        })
        .transpose()
}

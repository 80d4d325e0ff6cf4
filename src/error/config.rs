//! Errors raised while loading configuration from the environment.

use thiserror::Error;

/// Configuration error raised while reading the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set to a value that cannot be parsed.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the variable
        var: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl ConfigError {
    /// Hint printed after a configuration error.
    pub fn remediation(&self) -> &'static str {
        match self {
            Self::MissingEnvVar(_) => {
                "set the variable in the environment or in a .env file next to the binary \
                 (e.g. check DATABASE_URL / API_BASE_URL)"
            }
            Self::InvalidEnvValue { .. } => "fix the value of the variable and re-run",
        }
    }
}

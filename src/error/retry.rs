//! Deciding what to do with a row the database rejected.

use sea_orm::{DbErr, SqlErr};

/// Strategy for a row the database rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorRetryStrategy {
    /// Retry once with a simplified payload (constraint or validation failures)
    Simplify,
    /// Skip the row without retrying (transport failures)
    Skip,
}

/// Determine how to handle a rejected row based upon the database error.
pub fn row_retry_strategy(err: &DbErr) -> ErrorRetryStrategy {
    match err {
        // Connection errors won't be fixed by a smaller payload
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Skip,

        _ => match err.sql_err() {
            // Key collisions are decided by the values we keep, not the optional columns
            Some(SqlErr::UniqueConstraintViolation(_)) => ErrorRetryStrategy::Skip,
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => ErrorRetryStrategy::Skip,

            // CHECK constraints, NOT NULL on optional data, type mismatches, unknown errors
            _ => ErrorRetryStrategy::Simplify,
        },
    }
}

//! Row count verification of the charter tables.

use sea_orm::ConnectionTrait;

use crate::{
    data::table::count_rows,
    error::truncate_message,
    model::{
        report::{TableCount, VerificationReport},
        table::SeedTable,
    },
    service::populate::MAX_ERROR_CHARS,
};

/// Classifies the row count of every charter table against a target.
pub struct RowCountVerifier<'a, C: ConnectionTrait> {
    db: &'a C,
    target: u64,
}

impl<'a, C: ConnectionTrait> RowCountVerifier<'a, C> {
    /// Creates a new instance of [`RowCountVerifier`]
    pub fn new(db: &'a C, target: u64) -> Self {
        Self { db, target }
    }

    /// Count the rows of `tables`, in the given order.
    ///
    /// A table whose count cannot be read (e.g. it does not exist) is reported with its
    /// error message instead of failing the whole verification.
    pub async fn verify(&self, tables: &[SeedTable]) -> VerificationReport {
        let mut counts = Vec::with_capacity(tables.len());

        for &table in tables {
            let count = count_rows(self.db, table).await.map_err(|e| {
                tracing::warn!("Failed to count rows of {}: {}", table, e);
                truncate_message(&e.to_string(), MAX_ERROR_CHARS)
            });

            counts.push(TableCount {
                table: table.name(),
                count,
            });
        }

        VerificationReport {
            target: self.target,
            tables: counts,
        }
    }

    /// Count the rows of every charter table.
    pub async fn verify_all(&self) -> VerificationReport {
        self.verify(&SeedTable::ALL).await
    }
}

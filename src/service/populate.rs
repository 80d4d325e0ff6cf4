//! Deficit-based table population.
//!
//! The [`Populator`] brings a single table up to a target row count: it counts the existing
//! rows, generates exactly the missing number through a row factory and inserts them in
//! small batches. Rejected rows never abort the run, see [`Populator::populate`].

use std::time::Duration;

use rand::Rng;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityName, EntityTrait, IdenStatic, Iterable,
};

use crate::{
    config::Config,
    data::table::TableRepository,
    error::{
        retry::{row_retry_strategy, ErrorRetryStrategy},
        seed::SeedError,
        truncate_message,
    },
    model::{
        report::{PopulateOutcome, PopulateReport},
        schema::TableSchema,
    },
};

/// Maximum length of a database error message in log output.
pub const MAX_ERROR_CHARS: usize = 200;

/// Knobs of a population run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopulateSettings {
    /// Minimum number of rows every table should hold
    pub target: u64,
    /// Rows per insert statement
    pub batch_size: usize,
    /// Pause between insert statements
    pub batch_delay: Duration,
}

impl From<&Config> for PopulateSettings {
    fn from(config: &Config) -> Self {
        Self {
            target: config.target_count,
            batch_size: config.batch_size,
            batch_delay: config.batch_delay,
        }
    }
}

/// How the generated rows must be shaped to fit the live table.
pub struct ColumnPlan<E: EntityTrait> {
    /// Entity columns missing from the live table, never sent
    pub dropped: Vec<E::Column>,
    /// Entity columns the live table lets an INSERT leave out
    pub optional: Vec<E::Column>,
}

impl<E: EntityTrait> ColumnPlan<E> {
    /// Compare the entity's columns with the live column set.
    ///
    /// # Returns
    /// - `Ok(ColumnPlan)` - Rows can be written once the dropped columns are unset
    /// - `Err(SeedError::TableMissing)` - The live table does not exist
    /// - `Err(SeedError::SchemaDrift)` - The live table requires columns the entity lacks
    pub fn from_schema(table: &'static str, schema: &TableSchema) -> Result<Self, SeedError> {
        if !schema.exists() {
            return Err(SeedError::TableMissing(table.to_string()));
        }

        let known: Vec<&str> = E::Column::iter().map(|c| c.as_str()).collect();
        let unknown_required: Vec<String> = schema
            .columns
            .iter()
            .filter(|c| c.is_required() && !known.contains(&c.name.as_str()))
            .map(|c| c.name.clone())
            .collect();

        if !unknown_required.is_empty() {
            return Err(SeedError::SchemaDrift {
                table,
                columns: unknown_required,
            });
        }

        let mut dropped = Vec::new();
        let mut optional = Vec::new();
        for column in E::Column::iter() {
            match schema.column(column.as_str()) {
                None => dropped.push(column),
                Some(info) if info.is_optional() => optional.push(column),
                Some(_) => {}
            }
        }

        Ok(Self { dropped, optional })
    }
}

/// A table below its target, ready to be filled.
///
/// Returned by [`Populator::prepare`] once the row count and the live column set have been
/// checked, so callers can resolve parent rows only for tables that need them.
pub struct PendingFill<E: EntityTrait> {
    report: PopulateReport,
    columns: ColumnPlan<E>,
}

impl<E: EntityTrait> PendingFill<E> {
    /// Rows needed to reach the target.
    pub fn deficit(&self) -> u64 {
        self.report.deficit()
    }

    /// Give up on the table without inserting anything, keeping its existing count.
    pub fn skip(self, reason: impl Into<String>) -> PopulateReport {
        PopulateReport {
            outcome: PopulateOutcome::Skipped(reason.into()),
            ..self.report
        }
    }
}

/// Outcome of [`Populator::prepare`].
pub enum Prepared<E: EntityTrait> {
    /// Nothing will be inserted; the report is final.
    Done(PopulateReport),
    /// The table needs rows.
    Pending(PendingFill<E>),
}

/// Brings tables up to a target row count.
pub struct Populator<'a, C: ConnectionTrait> {
    db: &'a C,
    settings: PopulateSettings,
}

impl<'a, C: ConnectionTrait> Populator<'a, C> {
    /// Creates a new instance of [`Populator`]
    pub fn new(db: &'a C, settings: PopulateSettings) -> Self {
        Self { db, settings }
    }

    /// Populate `entity`'s table up to the target row count.
    ///
    /// Shorthand for [`Populator::prepare`] followed by [`Populator::fill`], for tables
    /// without parents.
    pub async fn populate<E, R, F>(
        &self,
        entity: E,
        schema: &TableSchema,
        rng: &mut R,
        factory: F,
    ) -> PopulateReport
    where
        E: EntityTrait,
        E::Model: Sync,
        R: Rng,
        F: FnMut(usize, &mut R) -> E::ActiveModel,
    {
        match self.prepare(entity, schema).await {
            Prepared::Done(report) => report,
            Prepared::Pending(pending) => self.fill(pending, rng, factory).await,
        }
    }

    /// Check whether `entity`'s table needs rows and whether they can be written.
    ///
    /// # Returns
    /// - `Prepared::Done` - The table is missing or drifted (`Skipped`), its rows cannot be
    ///   counted (`Failed`), or it already holds the target (`AlreadySatisfied`)
    /// - `Prepared::Pending` - `target - existing` rows are needed
    pub async fn prepare<E>(&self, entity: E, schema: &TableSchema) -> Prepared<E>
    where
        E: EntityTrait,
        E::Model: Sync,
    {
        let table = entity.table_name();
        let repo = TableRepository::<C, E>::new(self.db);
        let mut report = PopulateReport::new(table, self.settings.target);

        if !schema.exists() {
            let reason = SeedError::TableMissing(table.to_string()).to_string();
            tracing::warn!("Skipping {}: {}", table, reason);
            report.outcome = PopulateOutcome::Skipped(reason);
            return Prepared::Done(report);
        }

        report.existing = match repo.count().await {
            Ok(count) => count,
            Err(e) => {
                let reason = truncate_message(&e.to_string(), MAX_ERROR_CHARS);
                tracing::error!("Failed to count rows of {}: {}", table, reason);
                report.outcome = PopulateOutcome::Failed(reason);
                return Prepared::Done(report);
            }
        };

        if report.existing >= self.settings.target {
            tracing::info!(
                "{} already holds {} rows (target {})",
                table,
                report.existing,
                self.settings.target
            );
            report.outcome = PopulateOutcome::AlreadySatisfied;
            return Prepared::Done(report);
        }

        let columns = match ColumnPlan::<E>::from_schema(table, schema) {
            Ok(columns) => columns,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", table, e);
                report.outcome = PopulateOutcome::Skipped(e.to_string());
                return Prepared::Done(report);
            }
        };

        for column in &columns.dropped {
            tracing::warn!(
                "Column {}.{} does not exist in the live table, leaving it unset",
                table,
                column.as_str()
            );
        }

        Prepared::Pending(PendingFill { report, columns })
    }

    /// Generate and insert the missing rows of a prepared table.
    ///
    /// Exactly `target - existing` rows are generated with `factory`, called with the
    /// row's overall index and `rng`. Rows are inserted `batch_size` at a time with
    /// `batch_delay` between statements. A rejected batch falls back to row-by-row
    /// inserts; a rejected row is retried once without its optional columns, then
    /// counted as failed.
    ///
    /// # Arguments
    /// - `pending` - The table as returned by [`Populator::prepare`]
    /// - `rng` - Random source passed to the factory
    /// - `factory` - Builds one row from an index and the random source
    ///
    /// # Returns
    /// - `PopulateReport` - Counts and outcome; never an error, rejected rows are counted
    pub async fn fill<E, R, F>(
        &self,
        pending: PendingFill<E>,
        rng: &mut R,
        mut factory: F,
    ) -> PopulateReport
    where
        E: EntityTrait,
        E::Model: Sync,
        R: Rng,
        F: FnMut(usize, &mut R) -> E::ActiveModel,
    {
        let deficit = pending.deficit();
        let PendingFill {
            mut report,
            columns: plan,
        } = pending;
        let table = report.table;
        let repo = TableRepository::<C, E>::new(self.db);

        let offset = report.existing as usize;
        let rows: Vec<E::ActiveModel> = (0..deficit as usize)
            .map(|i| {
                let mut row = factory(offset + i, rng);
                for column in &plan.dropped {
                    row.not_set(*column);
                }
                row
            })
            .collect();

        report.attempted = rows.len() as u64;
        tracing::info!(
            "Populating {}: {} existing, {} rows needed",
            table,
            report.existing,
            report.attempted
        );

        let mut remaining = rows.into_iter().peekable();
        let mut batch_number = 0;

        while remaining.peek().is_some() {
            if batch_number > 0 && !self.settings.batch_delay.is_zero() {
                tokio::time::sleep(self.settings.batch_delay).await;
            }
            batch_number += 1;

            let batch: Vec<E::ActiveModel> =
                remaining.by_ref().take(self.settings.batch_size).collect();
            let size = batch.len() as u64;

            match repo.insert_many(batch.clone()).await {
                Ok(_) => {
                    tracing::debug!("Inserted batch {} of {} ({} rows)", batch_number, table, size);
                    report.inserted += size;
                }
                Err(e) => {
                    tracing::debug!(
                        "Batch {} of {} rejected, inserting row by row: {}",
                        batch_number,
                        table,
                        truncate_message(&e.to_string(), MAX_ERROR_CHARS)
                    );

                    for row in batch {
                        if self.insert_row(&repo, table, row, &plan.optional).await {
                            report.inserted += 1;
                        } else {
                            report.failed += 1;
                        }
                    }
                }
            }
        }

        tracing::info!(
            "Populated {}: {} inserted, {} failed",
            table,
            report.inserted,
            report.failed
        );

        report
    }

    /// Insert one row, retrying once with its optional columns unset.
    ///
    /// Returns whether the row was written.
    async fn insert_row<E>(
        &self,
        repo: &TableRepository<'a, C, E>,
        table: &str,
        row: E::ActiveModel,
        optional: &[E::Column],
    ) -> bool
    where
        E: EntityTrait,
        E::Model: Sync,
    {
        let err = match repo.insert_many(vec![row.clone()]).await {
            Ok(_) => return true,
            Err(e) => e,
        };

        if row_retry_strategy(&err) == ErrorRetryStrategy::Skip || optional.is_empty() {
            log_rejected_row(table, &err);
            return false;
        }

        let mut simplified = row;
        for column in optional {
            simplified.not_set(*column);
        }

        match repo.insert_many(vec![simplified]).await {
            Ok(_) => {
                tracing::debug!("Inserted simplified row into {}", table);
                true
            }
            Err(e) => {
                log_rejected_row(table, &e);
                false
            }
        }
    }
}

fn log_rejected_row(table: &str, err: &DbErr) {
    tracing::error!(
        "Failed to insert row into {}: {}",
        table,
        truncate_message(&err.to_string(), MAX_ERROR_CHARS)
    );
}

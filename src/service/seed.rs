//! The seed plan: every charter table, parents first, through one populator.

use rand::{rngs::StdRng, SeedableRng};
use sea_orm::ConnectionTrait;

use crate::{
    data::{parent::ParentRepository, table::delete_rows},
    error::{truncate_message, Error},
    fixture::{
        analytics, charter, fleet,
        pool::{AircraftRef, BookingRef, ParentPool},
        review,
    },
    model::{report::PopulateReport, table::SeedTable},
    service::{
        catalog::SchemaCatalog,
        populate::{PopulateSettings, Populator, Prepared, MAX_ERROR_CHARS},
    },
};

/// Which tables a seed run touches and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPlan {
    /// Tables to seed, in parents-first order
    pub tables: Vec<SeedTable>,
    /// Delete the selected tables (children first) before seeding
    pub reset: bool,
    /// Seed of the random source, `None` for a fresh one
    pub rng_seed: Option<u64>,
}

impl SeedPlan {
    /// Every charter table.
    pub fn all() -> Self {
        Self {
            tables: SeedTable::ALL.to_vec(),
            reset: false,
            rng_seed: None,
        }
    }

    /// A subset of the tables, reordered parents first; an empty selection means all.
    pub fn only(tables: &[SeedTable]) -> Self {
        if tables.is_empty() {
            return Self::all();
        }

        let mut selected = tables.to_vec();
        selected.sort();
        selected.dedup();

        Self {
            tables: selected,
            ..Self::all()
        }
    }

    /// Delete the selected tables, children first, before seeding.
    pub fn with_reset(mut self, reset: bool) -> Self {
        self.reset = reset;
        self
    }

    /// Seed the random source for a reproducible run.
    pub fn with_rng_seed(mut self, seed: Option<u64>) -> Self {
        self.rng_seed = seed;
        self
    }

    fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Resolve a table's [`Prepared`] state, returning its report early when no rows are needed.
macro_rules! prepare_or_return {
    ($populator:expr, $entity:expr, $schema:expr) => {
        match $populator.prepare($entity, $schema).await {
            Prepared::Pending(pending) => pending,
            Prepared::Done(report) => return Ok(report),
        }
    };
}

/// Require a non-empty parent pool, skipping the pending table otherwise.
macro_rules! require_or_skip {
    ($pending:expr, $pool:expr, $table:expr, $parent:expr) => {
        match $pool.require($table, $parent) {
            Ok(parents) => parents,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", $table, e);
                return Ok($pending.skip(e.to_string()));
            }
        }
    };
}

/// Runs a [`SeedPlan`] against a database.
pub struct SeedService<'a, C: ConnectionTrait> {
    db: &'a C,
    settings: PopulateSettings,
    schema: String,
}

impl<'a, C: ConnectionTrait> SeedService<'a, C> {
    /// Creates a new instance of [`SeedService`]
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `settings` - Target count and batching
    /// - `schema` - Database schema inspected before inserting (ignored on SQLite)
    pub fn new(db: &'a C, settings: PopulateSettings, schema: impl Into<String>) -> Self {
        Self {
            db,
            settings,
            schema: schema.into(),
        }
    }

    /// Seed every table of the plan, returning one report per table.
    ///
    /// Tables are processed in order and independently: a skipped or failed table does not
    /// stop the run, its children are skipped later if they end up without parents.
    ///
    /// # Returns
    /// - `Ok(Vec<PopulateReport>)` - One report per planned table
    pub async fn run(&self, plan: &SeedPlan) -> Result<Vec<PopulateReport>, Error> {
        let mut rng = plan.rng();
        let mut catalog = SchemaCatalog::new(self.db, self.schema.clone());

        if plan.reset {
            self.reset(&plan.tables, &mut catalog).await;
        }

        let mut reports = Vec::with_capacity(plan.tables.len());

        for &table in &plan.tables {
            let report = match self.seed_table(table, &mut catalog, &mut rng).await {
                Ok(report) => report,
                Err(Error::SeedError(e)) => {
                    tracing::warn!("Skipping {}: {}", table, e);
                    PopulateReport::skipped(table.name(), self.settings.target, e.to_string())
                }
                Err(e) => {
                    tracing::error!("Failed to seed {}: {}", table, e);
                    PopulateReport::failed(
                        table.name(),
                        self.settings.target,
                        truncate_message(&e.to_string(), MAX_ERROR_CHARS),
                    )
                }
            };
            reports.push(report);
        }

        Ok(reports)
    }

    /// Delete every row of `tables`, children first.
    ///
    /// Tables missing from the live database are skipped, and a table that cannot be
    /// cleared is logged without stopping the others.
    async fn reset(&self, tables: &[SeedTable], catalog: &mut SchemaCatalog<'a, C>) {
        for &table in tables.iter().rev() {
            match catalog.describe(table).await {
                Ok(schema) if !schema.exists() => {
                    tracing::warn!("Not resetting {}: table does not exist", table);
                    continue;
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::error!("Failed to inspect {} before reset: {}", table, e);
                    continue;
                }
            }

            match delete_rows(self.db, table).await {
                Ok(deleted) => tracing::info!("Reset {}: {} rows deleted", table, deleted),
                Err(e) => tracing::error!(
                    "Failed to reset {}: {}",
                    table,
                    truncate_message(&e.to_string(), MAX_ERROR_CHARS)
                ),
            }
        }
    }

    async fn aircraft_parents(
        &self,
        parents: &ParentRepository<'a, C>,
        catalog: &mut SchemaCatalog<'a, C>,
    ) -> Result<ParentPool<AircraftRef>, Error> {
        let schema = catalog.describe(SeedTable::Aircraft).await?;
        Ok(parents.aircraft(schema).await?)
    }

    async fn booking_parents(
        &self,
        parents: &ParentRepository<'a, C>,
        catalog: &mut SchemaCatalog<'a, C>,
    ) -> Result<ParentPool<BookingRef>, Error> {
        let schema = catalog.describe(SeedTable::Bookings).await?;
        Ok(parents.bookings(schema).await?)
    }

    /// Seed one table. Parent rows are only fetched once the table is known to need rows.
    async fn seed_table(
        &self,
        table: SeedTable,
        catalog: &mut SchemaCatalog<'a, C>,
        rng: &mut StdRng,
    ) -> Result<PopulateReport, Error> {
        let schema = catalog.describe(table).await?.clone();
        let parents = ParentRepository::new(self.db);
        let populator = Populator::new(self.db, self.settings);

        use entity::prelude::*;

        let report = match table {
            SeedTable::Operators => {
                populator
                    .populate(Operator, &schema, rng, |i, rng| fleet::operator(i, rng))
                    .await
            }
            SeedTable::Aircraft => {
                let pending = prepare_or_return!(populator, Aircraft, &schema);
                let operators = require_or_skip!(
                    pending,
                    parents.operators().await?,
                    table,
                    SeedTable::Operators
                );
                populator
                    .fill(pending, rng, |i, rng| fleet::aircraft(i, rng, &operators))
                    .await
            }
            SeedTable::FlightLegs => {
                let pending = prepare_or_return!(populator, FlightLeg, &schema);
                let aircraft = require_or_skip!(
                    pending,
                    self.aircraft_parents(&parents, catalog).await?,
                    table,
                    SeedTable::Aircraft
                );
                populator
                    .fill(pending, rng, |i, rng| charter::flight_leg(i, rng, &aircraft))
                    .await
            }
            SeedTable::CharterRequests => {
                populator
                    .populate(CharterRequest, &schema, rng, |i, rng| {
                        charter::charter_request(i, rng)
                    })
                    .await
            }
            SeedTable::PricingQuotes => {
                let pending = prepare_or_return!(populator, PricingQuote, &schema);
                let requests = require_or_skip!(
                    pending,
                    parents.charter_requests().await?,
                    table,
                    SeedTable::CharterRequests
                );
                let aircraft = require_or_skip!(
                    pending,
                    self.aircraft_parents(&parents, catalog).await?,
                    table,
                    SeedTable::Aircraft
                );
                populator
                    .fill(pending, rng, |i, rng| {
                        charter::pricing_quote(i, rng, &requests, &aircraft)
                    })
                    .await
            }
            SeedTable::Bookings => {
                let pending = prepare_or_return!(populator, Booking, &schema);
                let aircraft = require_or_skip!(
                    pending,
                    self.aircraft_parents(&parents, catalog).await?,
                    table,
                    SeedTable::Aircraft
                );
                populator
                    .fill(pending, rng, |i, rng| charter::booking(i, rng, &aircraft))
                    .await
            }
            SeedTable::BookingLegs => {
                let pending = prepare_or_return!(populator, BookingLeg, &schema);
                let bookings = require_or_skip!(
                    pending,
                    self.booking_parents(&parents, catalog).await?,
                    table,
                    SeedTable::Bookings
                );
                let flight_legs = require_or_skip!(
                    pending,
                    parents.flight_legs().await?,
                    table,
                    SeedTable::FlightLegs
                );
                populator
                    .fill(pending, rng, |i, rng| {
                        charter::booking_leg(i, rng, &bookings, &flight_legs)
                    })
                    .await
            }
            SeedTable::OperatorReviews => {
                let pending = prepare_or_return!(populator, OperatorReview, &schema);
                let operators = require_or_skip!(
                    pending,
                    parents.operators().await?,
                    table,
                    SeedTable::Operators
                );
                populator
                    .fill(pending, rng, |i, rng| {
                        review::operator_review(i, rng, &operators)
                    })
                    .await
            }
            SeedTable::AircraftReviews => {
                let pending = prepare_or_return!(populator, AircraftReview, &schema);
                let aircraft = require_or_skip!(
                    pending,
                    self.aircraft_parents(&parents, catalog).await?,
                    table,
                    SeedTable::Aircraft
                );
                populator
                    .fill(pending, rng, |i, rng| {
                        review::aircraft_review(i, rng, &aircraft)
                    })
                    .await
            }
            SeedTable::MaintenanceRecords => {
                let pending = prepare_or_return!(populator, MaintenanceRecord, &schema);
                let aircraft = require_or_skip!(
                    pending,
                    self.aircraft_parents(&parents, catalog).await?,
                    table,
                    SeedTable::Aircraft
                );
                populator
                    .fill(pending, rng, |i, rng| {
                        fleet::maintenance_record(i, rng, &aircraft)
                    })
                    .await
            }
            SeedTable::Transactions => {
                let pending = prepare_or_return!(populator, Transaction, &schema);
                let bookings = require_or_skip!(
                    pending,
                    self.booking_parents(&parents, catalog).await?,
                    table,
                    SeedTable::Bookings
                );
                populator
                    .fill(pending, rng, |i, rng| {
                        charter::transaction(i, rng, &bookings)
                    })
                    .await
            }
            SeedTable::MarketAnalytics => {
                populator
                    .populate(MarketAnalytics, &schema, rng, |i, rng| {
                        analytics::market_analytics(i, rng)
                    })
                    .await
            }
            SeedTable::PricePredictions => {
                populator
                    .populate(PricePrediction, &schema, rng, |i, rng| {
                        analytics::price_prediction(i, rng)
                    })
                    .await
            }
            SeedTable::DemandForecasts => {
                populator
                    .populate(DemandForecast, &schema, rng, |i, rng| {
                        analytics::demand_forecast(i, rng)
                    })
                    .await
            }
            SeedTable::RealTimeAlerts => {
                let pending = prepare_or_return!(populator, RealTimeAlert, &schema);
                let operators = require_or_skip!(
                    pending,
                    parents.operators().await?,
                    table,
                    SeedTable::Operators
                );
                populator
                    .fill(pending, rng, |i, rng| {
                        analytics::real_time_alert(i, rng, &operators)
                    })
                    .await
            }
            SeedTable::NotificationPreferences => {
                populator
                    .populate(NotificationPreference, &schema, rng, |i, rng| {
                        analytics::notification_preference(i, rng)
                    })
                    .await
            }
            SeedTable::UserBehaviorAnalytics => {
                populator
                    .populate(UserBehaviorAnalytics, &schema, rng, |i, rng| {
                        analytics::user_behavior_analytics(i, rng)
                    })
                    .await
            }
        };

        Ok(report)
    }
}

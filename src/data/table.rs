//! Row counts, bulk inserts and deletes over any charter table.

use std::marker::PhantomData;

use sea_orm::{ConnectionTrait, DbErr, EntityName, EntityTrait, Statement};

use crate::model::table::SeedTable;

/// Run an expression with `$entity` bound to the sea-orm entity type of a [`SeedTable`].
macro_rules! with_entity {
    ($table:expr, $entity:ident => $body:expr) => {
        match $table {
            $crate::model::table::SeedTable::Operators => {
                type $entity = entity::prelude::Operator;
                $body
            }
            $crate::model::table::SeedTable::Aircraft => {
                type $entity = entity::prelude::Aircraft;
                $body
            }
            $crate::model::table::SeedTable::FlightLegs => {
                type $entity = entity::prelude::FlightLeg;
                $body
            }
            $crate::model::table::SeedTable::CharterRequests => {
                type $entity = entity::prelude::CharterRequest;
                $body
            }
            $crate::model::table::SeedTable::PricingQuotes => {
                type $entity = entity::prelude::PricingQuote;
                $body
            }
            $crate::model::table::SeedTable::Bookings => {
                type $entity = entity::prelude::Booking;
                $body
            }
            $crate::model::table::SeedTable::BookingLegs => {
                type $entity = entity::prelude::BookingLeg;
                $body
            }
            $crate::model::table::SeedTable::OperatorReviews => {
                type $entity = entity::prelude::OperatorReview;
                $body
            }
            $crate::model::table::SeedTable::AircraftReviews => {
                type $entity = entity::prelude::AircraftReview;
                $body
            }
            $crate::model::table::SeedTable::MaintenanceRecords => {
                type $entity = entity::prelude::MaintenanceRecord;
                $body
            }
            $crate::model::table::SeedTable::Transactions => {
                type $entity = entity::prelude::Transaction;
                $body
            }
            $crate::model::table::SeedTable::MarketAnalytics => {
                type $entity = entity::prelude::MarketAnalytics;
                $body
            }
            $crate::model::table::SeedTable::PricePredictions => {
                type $entity = entity::prelude::PricePrediction;
                $body
            }
            $crate::model::table::SeedTable::DemandForecasts => {
                type $entity = entity::prelude::DemandForecast;
                $body
            }
            $crate::model::table::SeedTable::RealTimeAlerts => {
                type $entity = entity::prelude::RealTimeAlert;
                $body
            }
            $crate::model::table::SeedTable::NotificationPreferences => {
                type $entity = entity::prelude::NotificationPreference;
                $body
            }
            $crate::model::table::SeedTable::UserBehaviorAnalytics => {
                type $entity = entity::prelude::UserBehaviorAnalytics;
                $body
            }
        }
    };
}

/// Row-level operations on a single entity table.
pub struct TableRepository<'a, C: ConnectionTrait, E: EntityTrait> {
    db: &'a C,
    entity: PhantomData<E>,
}

impl<'a, C, E> TableRepository<'a, C, E>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: Sync,
{
    /// Creates a new instance of [`TableRepository`]
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Counts the rows of the table.
    ///
    /// Issues a bare `COUNT(*)` rather than counting over the entity's column projection, so a
    /// live table missing some entity columns can still be counted.
    pub async fn count(&self) -> Result<u64, DbErr> {
        let backend = self.db.get_database_backend();
        let stmt = Statement::from_string(
            backend,
            format!(
                "SELECT COUNT(*) AS row_count FROM \"{}\"",
                E::default().table_name()
            ),
        );

        let count = match self.db.query_one_raw(stmt).await? {
            Some(row) => row.try_get::<i64>("", "row_count")?,
            None => 0,
        };

        Ok(count.max(0) as u64)
    }

    /// Inserts rows in a single statement, returning the number of rows written.
    ///
    /// The statement is atomic: if any row is rejected, none are written.
    pub async fn insert_many(&self, rows: Vec<E::ActiveModel>) -> Result<u64, DbErr> {
        if rows.is_empty() {
            return Ok(0);
        }

        E::insert_many(rows).exec_without_returning(self.db).await
    }

    /// Deletes every row, returning the number of rows removed.
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = E::delete_many().exec(self.db).await?;

        Ok(result.rows_affected)
    }
}

/// Counts the rows of a table.
pub async fn count_rows<C: ConnectionTrait>(db: &C, table: SeedTable) -> Result<u64, DbErr> {
    with_entity!(table, E => TableRepository::<C, E>::new(db).count().await)
}

/// Deletes every row of a table, returning the number of rows removed.
pub async fn delete_rows<C: ConnectionTrait>(db: &C, table: SeedTable) -> Result<u64, DbErr> {
    with_entity!(table, E => TableRepository::<C, E>::new(db).delete_all().await)
}

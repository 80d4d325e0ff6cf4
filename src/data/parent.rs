//! Parent rows fetched for child tables.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, IdenStatic, JsonValue, QuerySelect};

use crate::{
    fixture::pool::{AircraftRef, BookingRef, ParentPool},
    model::schema::TableSchema,
};

/// Number of parent rows fetched per child table.
pub const PARENT_FETCH_LIMIT: u64 = 20;

/// Fetches the parent rows that generated child rows reference.
///
/// Only primary keys (and the operator of an aircraft) are taken as they are. The other
/// attributes children derive values from are read from the columns the live table actually
/// has, and fall back to catalog defaults when missing or NULL.
pub struct ParentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
    limit: u64,
}

impl<'a, C: ConnectionTrait> ParentRepository<'a, C> {
    /// Creates a repository fetching up to [`PARENT_FETCH_LIMIT`] rows per pool.
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            limit: PARENT_FETCH_LIMIT,
        }
    }

    /// Override the number of rows fetched per pool.
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Ids of the first `limit` rows of an entity whose primary key is `id_column`.
    pub async fn ids<E>(&self, id_column: E::Column) -> Result<ParentPool<String>, DbErr>
    where
        E: EntityTrait,
    {
        let ids = E::find()
            .select_only()
            .column(id_column)
            .limit(self.limit)
            .into_tuple::<String>()
            .all(self.db)
            .await?;

        Ok(ParentPool::new(ids))
    }

    /// Ids of up to `limit` operators.
    pub async fn operators(&self) -> Result<ParentPool<String>, DbErr> {
        self.ids::<entity::prelude::Operator>(entity::operator::Column::Id)
            .await
    }

    /// Ids of up to `limit` charter requests.
    pub async fn charter_requests(&self) -> Result<ParentPool<String>, DbErr> {
        self.ids::<entity::prelude::CharterRequest>(entity::charter_request::Column::Id)
            .await
    }

    /// Ids of up to `limit` flight legs.
    pub async fn flight_legs(&self) -> Result<ParentPool<String>, DbErr> {
        self.ids::<entity::prelude::FlightLeg>(entity::flight_leg::Column::Id)
            .await
    }

    /// Up to `limit` aircraft with their operator, category, rate and capacity.
    ///
    /// # Arguments
    /// - `schema` - Live column set of the aircraft table
    pub async fn aircraft(&self, schema: &TableSchema) -> Result<ParentPool<AircraftRef>, DbErr> {
        use entity::aircraft::Column;

        let rows = self
            .rows::<entity::prelude::Aircraft>(
                schema,
                &[
                    Column::Id,
                    Column::OperatorId,
                    Column::Category,
                    Column::HourlyRate,
                    Column::PassengerCapacity,
                ],
            )
            .await?;

        Ok(ParentPool::new(
            rows.iter()
                .filter_map(|row| {
                    Some(AircraftRef::from_columns(
                        text(row, "id")?,
                        text(row, "operator_id")?,
                        text(row, "category"),
                        row.get("hourly_rate").and_then(JsonValue::as_f64),
                        row.get("passenger_capacity")
                            .and_then(JsonValue::as_i64)
                            .map(|seats| seats as i32),
                    ))
                })
                .collect(),
        ))
    }

    /// Up to `limit` bookings with their total and currency.
    ///
    /// # Arguments
    /// - `schema` - Live column set of the bookings table
    pub async fn bookings(&self, schema: &TableSchema) -> Result<ParentPool<BookingRef>, DbErr> {
        use entity::booking::Column;

        let rows = self
            .rows::<entity::prelude::Booking>(
                schema,
                &[Column::Id, Column::TotalAmount, Column::Currency],
            )
            .await?;

        Ok(ParentPool::new(
            rows.iter()
                .filter_map(|row| {
                    Some(BookingRef::from_columns(
                        text(row, "id")?,
                        row.get("total_amount").and_then(JsonValue::as_f64),
                        text(row, "currency"),
                    ))
                })
                .collect(),
        ))
    }

    /// The first `limit` rows, projected onto those of `columns` the live table has.
    async fn rows<E>(
        &self,
        schema: &TableSchema,
        columns: &[E::Column],
    ) -> Result<Vec<JsonValue>, DbErr>
    where
        E: EntityTrait,
    {
        let present: Vec<E::Column> = columns
            .iter()
            .copied()
            .filter(|column| schema.column(column.as_str()).is_some())
            .collect();

        if present.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = E::find().select_only();
        for column in present {
            query = query.column(column);
        }

        query.limit(self.limit).into_json().all(self.db).await
    }
}

/// A non-NULL text column of a JSON row.
fn text(row: &JsonValue, column: &str) -> Option<String> {
    row.get(column)
        .and_then(JsonValue::as_str)
        .map(str::to_string)
}

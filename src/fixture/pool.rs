//! Parent rows child fixtures pick their references from.

use rand::Rng;

use crate::{error::seed::SeedError, fixture::catalog, model::table::SeedTable};

/// Parent rows fetched from the database, possibly none.
#[derive(Debug, Clone, PartialEq)]
pub struct ParentPool<T> {
    items: Vec<T>,
}

impl<T> ParentPool<T> {
    /// Wraps the fetched rows.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Number of fetched rows.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing was fetched.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Require at least one parent row for `table` to reference.
    pub fn require(self, table: SeedTable, parent: SeedTable) -> Result<Parents<T>, SeedError> {
        if self.items.is_empty() {
            return Err(SeedError::MissingParents {
                table: table.name(),
                parent: parent.name(),
            });
        }

        Ok(Parents { items: self.items })
    }
}

/// A non-empty set of parent rows generated children pick from uniformly.
#[derive(Debug, Clone, PartialEq)]
pub struct Parents<T> {
    items: Vec<T>,
}

impl<T> Parents<T> {
    /// Pick a parent uniformly at random.
    pub fn pick(&self, rng: &mut impl Rng) -> &T {
        &self.items[rng.random_range(0..self.items.len())]
    }

    /// The parent rows in fetch order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

/// Booking total assumed when a parent booking has none.
pub const FALLBACK_BOOKING_AMOUNT: f64 = 25_000.0;

/// The aircraft columns child rows derive values from.
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftRef {
    /// Primary key
    pub id: String,
    /// Owning operator
    pub operator_id: String,
    /// Aircraft category, e.g. `midsize_jet`
    pub category: String,
    /// Charter rate per flight hour
    pub hourly_rate: f64,
    /// Passenger seats
    pub passenger_capacity: i32,
}

impl AircraftRef {
    /// Build a reference from column values the live table may lack or hold NULL in.
    ///
    /// Missing values are taken from the category's profile (midsize when the category is
    /// missing or unknown): the middle of its rate range and its largest cabin.
    pub fn from_columns(
        id: String,
        operator_id: String,
        category: Option<String>,
        hourly_rate: Option<f64>,
        passenger_capacity: Option<i32>,
    ) -> Self {
        let profile = catalog::profile_for(category.as_deref().unwrap_or_default());
        let (low, high) = profile.hourly_rate;

        Self {
            id,
            operator_id,
            category: category.unwrap_or_else(|| profile.category.to_string()),
            hourly_rate: hourly_rate
                .filter(|rate| *rate > 0.0)
                .unwrap_or_else(|| catalog::money((low + high) / 2.0)),
            passenger_capacity: passenger_capacity
                .filter(|seats| *seats > 0)
                .unwrap_or(profile.passengers.1),
        }
    }
}

/// The booking columns child rows derive values from.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRef {
    /// Primary key
    pub id: String,
    /// Amount charged for the booking
    pub total_amount: f64,
    /// ISO currency code
    pub currency: String,
}

impl BookingRef {
    /// Build a reference from column values the live table may lack or hold NULL in.
    pub fn from_columns(id: String, total_amount: Option<f64>, currency: Option<String>) -> Self {
        Self {
            id,
            total_amount: total_amount
                .filter(|amount| *amount > 0.0)
                .unwrap_or(FALLBACK_BOOKING_AMOUNT),
            currency: currency.unwrap_or_else(|| catalog::CURRENCY.to_string()),
        }
    }
}

use rand::{rngs::StdRng, SeedableRng};
use sea_orm::ActiveValue;

use crate::{
    fixture::pool::{AircraftRef, BookingRef, ParentPool, Parents},
    model::table::SeedTable,
};

mod analytics;
mod charter;
mod fleet;
mod review;

fn rng() -> StdRng {
    StdRng::seed_from_u64(20)
}

fn ids(prefix: &str, count: usize) -> Parents<String> {
    ParentPool::new((1..=count).map(|n| format!("{}_{}", prefix, n)).collect())
        .require(SeedTable::Aircraft, SeedTable::Operators)
        .expect("non-empty pool")
}

fn aircraft_refs() -> Parents<AircraftRef> {
    ParentPool::new(vec![
        AircraftRef {
            id: "AC_1".to_string(),
            operator_id: "OP_1".to_string(),
            category: "light_jet".to_string(),
            hourly_rate: 3_500.0,
            passenger_capacity: 7,
        },
        AircraftRef {
            id: "AC_2".to_string(),
            operator_id: "OP_2".to_string(),
            category: "heavy_jet".to_string(),
            hourly_rate: 7_200.0,
            passenger_capacity: 14,
        },
    ])
    .require(SeedTable::FlightLegs, SeedTable::Aircraft)
    .expect("non-empty pool")
}

fn booking_refs() -> Parents<BookingRef> {
    ParentPool::new(vec![BookingRef {
        id: "BK_1".to_string(),
        total_amount: 20_000.0,
        currency: "USD".to_string(),
    }])
    .require(SeedTable::Transactions, SeedTable::Bookings)
    .expect("non-empty pool")
}

/// The value of a set field.
fn value<T: Into<sea_orm::Value>>(field: ActiveValue<T>) -> T {
    match field {
        ActiveValue::Set(value) | ActiveValue::Unchanged(value) => value,
        ActiveValue::NotSet => panic!("field not set"),
    }
}

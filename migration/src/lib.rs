pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_operators_table;
mod m20250301_000002_create_aircraft_table;
mod m20250301_000003_create_flight_legs_table;
mod m20250301_000004_create_charter_requests_table;
mod m20250301_000005_create_pricing_quotes_table;
mod m20250301_000006_create_bookings_table;
mod m20250301_000007_create_booking_legs_table;
mod m20250301_000008_create_operator_reviews_table;
mod m20250301_000009_create_aircraft_reviews_table;
mod m20250301_000010_create_maintenance_records_table;
mod m20250301_000011_create_transactions_table;
mod m20250301_000012_create_market_analytics_table;
mod m20250301_000013_create_price_predictions_table;
mod m20250301_000014_create_demand_forecasts_table;
mod m20250301_000015_create_real_time_alerts_table;
mod m20250301_000016_create_notification_preferences_table;
mod m20250301_000017_create_user_behavior_analytics_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_operators_table::Migration),
            Box::new(m20250301_000002_create_aircraft_table::Migration),
            Box::new(m20250301_000003_create_flight_legs_table::Migration),
            Box::new(m20250301_000004_create_charter_requests_table::Migration),
            Box::new(m20250301_000005_create_pricing_quotes_table::Migration),
            Box::new(m20250301_000006_create_bookings_table::Migration),
            Box::new(m20250301_000007_create_booking_legs_table::Migration),
            Box::new(m20250301_000008_create_operator_reviews_table::Migration),
            Box::new(m20250301_000009_create_aircraft_reviews_table::Migration),
            Box::new(m20250301_000010_create_maintenance_records_table::Migration),
            Box::new(m20250301_000011_create_transactions_table::Migration),
            Box::new(m20250301_000012_create_market_analytics_table::Migration),
            Box::new(m20250301_000013_create_price_predictions_table::Migration),
            Box::new(m20250301_000014_create_demand_forecasts_table::Migration),
            Box::new(m20250301_000015_create_real_time_alerts_table::Migration),
            Box::new(m20250301_000016_create_notification_preferences_table::Migration),
            Box::new(m20250301_000017_create_user_behavior_analytics_table::Migration),
        ]
    }
}

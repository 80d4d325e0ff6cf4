//! The fixed set of charter tables managed by the seeder.

use std::{fmt, str::FromStr};

/// A charter table known to the seeder.
///
/// Variants are declared parents-first: every table only references tables declared before
/// it, so iterating [`SeedTable::ALL`] in order never seeds a child before its parents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SeedTable {
    /// `operators`
    Operators,
    /// `aircraft`, references operators
    Aircraft,
    /// `flight_legs`, references aircraft
    FlightLegs,
    /// `charter_requests`
    CharterRequests,
    /// `pricing_quotes`, references charter requests, operators and aircraft
    PricingQuotes,
    /// `bookings`, references aircraft and operators
    Bookings,
    /// `booking_legs`, references bookings and flight legs
    BookingLegs,
    /// `operator_reviews`, references operators
    OperatorReviews,
    /// `aircraft_reviews`, references aircraft
    AircraftReviews,
    /// `maintenance_records`, references aircraft
    MaintenanceRecords,
    /// `transactions`, references bookings
    Transactions,
    /// `market_analytics`
    MarketAnalytics,
    /// `price_predictions`
    PricePredictions,
    /// `demand_forecasts`
    DemandForecasts,
    /// `real_time_alerts`, references operators
    RealTimeAlerts,
    /// `notification_preferences`
    NotificationPreferences,
    /// `user_behavior_analytics`
    UserBehaviorAnalytics,
}

impl SeedTable {
    /// Every table in seeding order.
    pub const ALL: [SeedTable; 17] = [
        SeedTable::Operators,
        SeedTable::Aircraft,
        SeedTable::FlightLegs,
        SeedTable::CharterRequests,
        SeedTable::PricingQuotes,
        SeedTable::Bookings,
        SeedTable::BookingLegs,
        SeedTable::OperatorReviews,
        SeedTable::AircraftReviews,
        SeedTable::MaintenanceRecords,
        SeedTable::Transactions,
        SeedTable::MarketAnalytics,
        SeedTable::PricePredictions,
        SeedTable::DemandForecasts,
        SeedTable::RealTimeAlerts,
        SeedTable::NotificationPreferences,
        SeedTable::UserBehaviorAnalytics,
    ];

    /// Database table name.
    pub fn name(self) -> &'static str {
        match self {
            SeedTable::Operators => "operators",
            SeedTable::Aircraft => "aircraft",
            SeedTable::FlightLegs => "flight_legs",
            SeedTable::CharterRequests => "charter_requests",
            SeedTable::PricingQuotes => "pricing_quotes",
            SeedTable::Bookings => "bookings",
            SeedTable::BookingLegs => "booking_legs",
            SeedTable::OperatorReviews => "operator_reviews",
            SeedTable::AircraftReviews => "aircraft_reviews",
            SeedTable::MaintenanceRecords => "maintenance_records",
            SeedTable::Transactions => "transactions",
            SeedTable::MarketAnalytics => "market_analytics",
            SeedTable::PricePredictions => "price_predictions",
            SeedTable::DemandForecasts => "demand_forecasts",
            SeedTable::RealTimeAlerts => "real_time_alerts",
            SeedTable::NotificationPreferences => "notification_preferences",
            SeedTable::UserBehaviorAnalytics => "user_behavior_analytics",
        }
    }

    /// Tables that must hold rows before this table can be seeded.
    pub fn parents(self) -> &'static [SeedTable] {
        match self {
            SeedTable::Aircraft => &[SeedTable::Operators],
            SeedTable::FlightLegs => &[SeedTable::Aircraft],
            SeedTable::PricingQuotes => &[SeedTable::CharterRequests, SeedTable::Aircraft],
            SeedTable::Bookings => &[SeedTable::Aircraft],
            SeedTable::BookingLegs => &[SeedTable::Bookings, SeedTable::FlightLegs],
            SeedTable::OperatorReviews => &[SeedTable::Operators],
            SeedTable::AircraftReviews => &[SeedTable::Aircraft],
            SeedTable::MaintenanceRecords => &[SeedTable::Aircraft],
            SeedTable::Transactions => &[SeedTable::Bookings],
            SeedTable::RealTimeAlerts => &[SeedTable::Operators],
            _ => &[],
        }
    }
}

impl fmt::Display for SeedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown table name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTable(pub String);

impl fmt::Display for UnknownTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown table '{}'", self.0)
    }
}

impl std::error::Error for UnknownTable {}

impl FromStr for SeedTable {
    type Err = UnknownTable;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        SeedTable::ALL
            .into_iter()
            .find(|table| table.name() == name)
            .ok_or(UnknownTable(s.to_string()))
    }
}

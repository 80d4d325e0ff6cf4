//! SeaORM entities for the charter marketplace demo schema.

pub mod prelude;

pub mod aircraft;
pub mod aircraft_review;
pub mod booking;
pub mod booking_leg;
pub mod charter_request;
pub mod demand_forecast;
pub mod flight_leg;
pub mod maintenance_record;
pub mod market_analytics;
pub mod notification_preference;
pub mod operator;
pub mod operator_review;
pub mod price_prediction;
pub mod pricing_quote;
pub mod real_time_alert;
pub mod transaction;
pub mod user_behavior_analytics;

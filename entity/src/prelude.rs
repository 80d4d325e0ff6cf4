pub use super::aircraft::Entity as Aircraft;
pub use super::aircraft_review::Entity as AircraftReview;
pub use super::booking::Entity as Booking;
pub use super::booking_leg::Entity as BookingLeg;
pub use super::charter_request::Entity as CharterRequest;
pub use super::demand_forecast::Entity as DemandForecast;
pub use super::flight_leg::Entity as FlightLeg;
pub use super::maintenance_record::Entity as MaintenanceRecord;
pub use super::market_analytics::Entity as MarketAnalytics;
pub use super::notification_preference::Entity as NotificationPreference;
pub use super::operator::Entity as Operator;
pub use super::operator_review::Entity as OperatorReview;
pub use super::price_prediction::Entity as PricePrediction;
pub use super::pricing_quote::Entity as PricingQuote;
pub use super::real_time_alert::Entity as RealTimeAlert;
pub use super::transaction::Entity as Transaction;
pub use super::user_behavior_analytics::Entity as UserBehaviorAnalytics;

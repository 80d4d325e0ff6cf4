//! Factory functions for charter models with fixed test values.
//!
//! These are in-memory model instances that don't require database interaction.

use chrono::Utc;
use entity::{aircraft, operator};
use serde_json::json;

/// Create a mock operator model.
///
/// # Arguments
/// - `operator_id` - Primary key of the operator
///
/// # Returns
/// - `operator::Model` - An active Part 135 operator based at KTEB
pub fn mock_operator_model(operator_id: &str) -> operator::Model {
    let now = Utc::now().naive_utc();
    operator::Model {
        id: operator_id.to_string(),
        name: format!("Test Charter {}", operator_id),
        certificate_number: format!("CERT-{}", operator_id),
        headquarters: "KTEB".to_string(),
        operating_bases: json!(["KTEB", "KHPN"]),
        certifications: json!(["FAA Part 135"]),
        fleet_size: 4,
        rating: 4.5,
        status: "active".to_string(),
        contact_email: None,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock aircraft model.
///
/// # Arguments
/// - `aircraft_id` - Primary key of the aircraft
/// - `operator_id` - Operator owning the aircraft
///
/// # Returns
/// - `aircraft::Model` - A midsize jet chartered at 4,500 USD per hour
pub fn mock_aircraft_model(aircraft_id: &str, operator_id: &str) -> aircraft::Model {
    let now = Utc::now().naive_utc();
    aircraft::Model {
        id: aircraft_id.to_string(),
        operator_id: operator_id.to_string(),
        registration: format!("N-{}", aircraft_id),
        model: "Citation XLS+".to_string(),
        category: "midsize_jet".to_string(),
        passenger_capacity: 8,
        range_nm: 2_100,
        cruise_speed_kts: 440,
        hourly_rate: 4_500.0,
        home_base: "KTEB".to_string(),
        year_built: 2018,
        status: "available".to_string(),
        created_at: now,
        updated_at: now,
    }
}

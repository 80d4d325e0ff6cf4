use super::*;
use crate::fixture::{analytics, catalog};

#[test]
fn forecast_interval_contains_prediction() {
    let mut rng = rng();

    for index in 0..50 {
        let row = analytics::demand_forecast(index, &mut rng);
        let predicted = value(row.predicted_requests);
        let low = value(row.confidence_low).expect("low bound");
        let high = value(row.confidence_high).expect("high bound");

        assert!(low <= predicted && predicted <= high);
    }
}

#[test]
fn alerts_reference_fetched_operators() {
    let operators = ids("OP", 2);
    let mut rng = rng();

    for index in 0..20 {
        let row = analytics::real_time_alert(index, &mut rng, &operators);
        let message = value(row.message);

        assert!(operators.iter().any(|id| *id == value(row.operator_id.clone())));
        assert!(!message.contains("{}"));
        assert!(catalog::ALERT_SEVERITIES.contains(&value(row.severity).as_str()));
    }
}

#[test]
fn notification_preferences_subscribe_to_known_alerts() {
    let mut rng = rng();

    for index in 0..20 {
        let row = analytics::notification_preference(index, &mut rng);
        let alert_types = value(row.alert_types);
        let alert_types = alert_types.as_array().expect("alert types array");

        assert!(!alert_types.is_empty());
        for alert_type in alert_types {
            let alert_type = alert_type.as_str().expect("alert type string");
            assert!(catalog::ALERTS.iter().any(|(kind, _, _)| *kind == alert_type));
        }
    }
}

#[test]
fn behavior_routes_only_on_route_events() {
    let mut rng = rng();

    for index in 0..50 {
        let row = analytics::user_behavior_analytics(index, &mut rng);
        let event_type = value(row.event_type);
        let route = value(row.route);

        match event_type.as_str() {
            "search" | "request_quote" | "book" => assert!(route.is_some()),
            _ => assert!(route.is_none()),
        }
    }
}

//! Market analytics, pricing predictions, alerts and user behavior.

use chrono::Duration;
use entity::{
    demand_forecast, market_analytics, notification_preference, price_prediction,
    real_time_alert, user_behavior_analytics,
};
use rand::Rng;
use sea_orm::ActiveValue;
use serde_json::json;

use crate::fixture::{
    catalog::{self, pick, pick_many},
    ident,
    pool::Parents,
};

/// Average flight hours assumed when pricing a route.
fn route_hours(rng: &mut impl Rng) -> f64 {
    rng.random_range(1.5..=4.5)
}

/// A route's demand and pricing snapshot.
pub fn market_analytics(_index: usize, rng: &mut impl Rng) -> market_analytics::ActiveModel {
    let profile = pick(rng, catalog::AIRCRAFT_PROFILES);
    let hourly_rate = rng.random_range(profile.hourly_rate.0..=profile.hourly_rate.1);
    let load_factor = if rng.random_bool(0.8) {
        Some(catalog::round_to(rng.random_range(0.45..=0.95), 2))
    } else {
        None
    };

    market_analytics::ActiveModel {
        id: ActiveValue::Set(ident::uuid(rng)),
        route: ActiveValue::Set(catalog::route_code(rng)),
        aircraft_category: ActiveValue::Set(profile.category.to_string()),
        period_start: ActiveValue::Set(catalog::days_from_now(rng, -180, -7)),
        average_price: ActiveValue::Set(catalog::money(hourly_rate * route_hours(rng))),
        demand_index: ActiveValue::Set(catalog::round_to(rng.random_range(0.5..=1.8), 2)),
        booking_volume: ActiveValue::Set(rng.random_range(5..=250)),
        load_factor: ActiveValue::Set(load_factor),
        created_at: ActiveValue::Set(catalog::now()),
    }
}

/// A predicted price for a route and date.
pub fn price_prediction(_index: usize, rng: &mut impl Rng) -> price_prediction::ActiveModel {
    let profile = pick(rng, catalog::AIRCRAFT_PROFILES);
    let hourly_rate = rng.random_range(profile.hourly_rate.0..=profile.hourly_rate.1);
    let fuel_index = catalog::round_to(rng.random_range(0.9..=1.25), 2);
    let seasonality = catalog::round_to(rng.random_range(0.8..=1.3), 2);

    price_prediction::ActiveModel {
        id: ActiveValue::Set(ident::uuid(rng)),
        route: ActiveValue::Set(catalog::route_code(rng)),
        aircraft_category: ActiveValue::Set(profile.category.to_string()),
        prediction_date: ActiveValue::Set(catalog::days_from_now(rng, 1, 90)),
        predicted_price: ActiveValue::Set(catalog::money(
            hourly_rate * route_hours(rng) * fuel_index * seasonality,
        )),
        confidence: ActiveValue::Set(catalog::round_to(rng.random_range(0.6..=0.97), 2)),
        model_version: ActiveValue::Set(pick(rng, catalog::PRICING_MODEL_VERSIONS).to_string()),
        factors: ActiveValue::Set(Some(json!({
            "fuel_index": fuel_index,
            "seasonality": seasonality,
            "competitor_count": rng.random_range(2..=12),
        }))),
        created_at: ActiveValue::Set(catalog::now()),
    }
}

/// A demand forecast for one airport.
pub fn demand_forecast(_index: usize, rng: &mut impl Rng) -> demand_forecast::ActiveModel {
    let predicted_requests = rng.random_range(10..=400);
    let spread = (predicted_requests / 5).max(1);

    demand_forecast::ActiveModel {
        id: ActiveValue::Set(ident::uuid(rng)),
        airport_code: ActiveValue::Set(pick(rng, catalog::AIRPORTS).to_string()),
        forecast_date: ActiveValue::Set(catalog::days_from_now(rng, 1, 60)),
        predicted_requests: ActiveValue::Set(predicted_requests),
        seasonality_factor: ActiveValue::Set(catalog::round_to(rng.random_range(0.7..=1.4), 2)),
        confidence_low: ActiveValue::Set(Some((predicted_requests - spread).max(0))),
        confidence_high: ActiveValue::Set(Some(predicted_requests + spread)),
        created_at: ActiveValue::Set(catalog::now()),
    }
}

/// An alert addressed to one of `operators`.
pub fn real_time_alert(
    _index: usize,
    rng: &mut impl Rng,
    operators: &Parents<String>,
) -> real_time_alert::ActiveModel {
    let now = catalog::now();
    let (alert_type, title, template) = *pick(rng, catalog::ALERTS);
    let airport = *pick(rng, catalog::AIRPORTS);

    real_time_alert::ActiveModel {
        id: ActiveValue::Set(ident::uuid(rng)),
        operator_id: ActiveValue::Set(operators.pick(rng).clone()),
        alert_type: ActiveValue::Set(alert_type.to_string()),
        severity: ActiveValue::Set(pick(rng, catalog::ALERT_SEVERITIES).to_string()),
        title: ActiveValue::Set(title.to_string()),
        message: ActiveValue::Set(template.replace("{}", airport)),
        is_read: ActiveValue::Set(rng.random_bool(0.3)),
        expires_at: ActiveValue::Set(Some(now + Duration::hours(rng.random_range(6..=72)))),
        created_at: ActiveValue::Set(now),
    }
}

/// A user's notification settings.
pub fn notification_preference(
    _index: usize,
    rng: &mut impl Rng,
) -> notification_preference::ActiveModel {
    let now = catalog::now();
    let alert_types: Vec<&str> = catalog::ALERTS.iter().map(|(kind, _, _)| *kind).collect();
    let subscribed_count = rng.random_range(1..=alert_types.len());
    let subscribed = pick_many(rng, &alert_types, subscribed_count);

    let price_threshold = if rng.random_bool(0.6) {
        Some(catalog::money(rng.random_range(5_000.0..=50_000.0)))
    } else {
        None
    };
    let routes: Vec<String> = (0..rng.random_range(0..=3))
        .map(|_| catalog::route_code(rng))
        .collect();

    notification_preference::ActiveModel {
        id: ActiveValue::Set(ident::uuid(rng)),
        user_id: ActiveValue::Set(ident::user_id(rng)),
        channel: ActiveValue::Set(pick(rng, catalog::NOTIFICATION_CHANNELS).to_string()),
        alert_types: ActiveValue::Set(json!(subscribed)),
        price_threshold: ActiveValue::Set(price_threshold),
        preferred_routes: ActiveValue::Set((!routes.is_empty()).then(|| json!(routes))),
        is_enabled: ActiveValue::Set(rng.random_bool(0.85)),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
}

/// One tracked user action.
pub fn user_behavior_analytics(
    _index: usize,
    rng: &mut impl Rng,
) -> user_behavior_analytics::ActiveModel {
    let event_type = *pick(rng, catalog::BEHAVIOR_EVENTS);
    let route = match event_type {
        "search" | "request_quote" | "book" => Some(catalog::route_code(rng)),
        _ => None,
    };

    user_behavior_analytics::ActiveModel {
        id: ActiveValue::Set(ident::uuid(rng)),
        user_id: ActiveValue::Set(ident::user_id(rng)),
        session_id: ActiveValue::Set(ident::uuid(rng)),
        event_type: ActiveValue::Set(event_type.to_string()),
        page: ActiveValue::Set(pick(rng, catalog::PAGES).to_string()),
        route: ActiveValue::Set(route),
        metadata: ActiveValue::Set(Some(json!({
            "device": pick(rng, catalog::DEVICES),
            "referrer": pick(rng, catalog::REFERRERS),
        }))),
        duration_seconds: ActiveValue::Set(rng.random_range(5..=900)),
        created_at: ActiveValue::Set(catalog::days_from_now(rng, -30, 0)),
    }
}

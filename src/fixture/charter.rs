//! Flight legs, charter requests, quotes, bookings and payments.

use chrono::Duration;
use entity::{booking, booking_leg, charter_request, flight_leg, pricing_quote, transaction};
use rand::Rng;
use sea_orm::ActiveValue;
use serde_json::json;

use crate::fixture::{
    catalog::{self, pick},
    ident,
    pool::{AircraftRef, BookingRef, Parents},
};

/// Typical block speed used to turn distances into flight times.
const BLOCK_SPEED_KTS: f64 = 420.0;
/// Taxi, climb and descent allowance added to every leg.
const TAXI_MINUTES: i32 = 20;
/// US federal excise tax on charter flights.
const FEDERAL_EXCISE_TAX: f64 = 0.075;

fn flight_hours(rng: &mut impl Rng) -> f64 {
    catalog::round_to(rng.random_range(1.0..=6.0), 1)
}

/// A scheduled leg flown by one of `aircraft`, timed from the route distance.
pub fn flight_leg(
    _index: usize,
    rng: &mut impl Rng,
    aircraft: &Parents<AircraftRef>,
) -> flight_leg::ActiveModel {
    let now = catalog::now();
    let craft = aircraft.pick(rng);
    let (departure, arrival) = catalog::route(rng);
    let distance_nm = rng.random_range(150..=2_500);
    let flight_time_minutes = (distance_nm as f64 / BLOCK_SPEED_KTS * 60.0).round() as i32 + TAXI_MINUTES;
    let departure_time = catalog::days_from_now(rng, -30, 60);

    let is_empty_leg = rng.random_bool(0.35);
    let empty_leg_price = if is_empty_leg {
        let hours = flight_time_minutes as f64 / 60.0;
        Some(catalog::money(
            craft.hourly_rate * hours * rng.random_range(0.25..=0.5),
        ))
    } else {
        None
    };

    let status = if departure_time < now {
        if rng.random_bool(0.9) {
            "completed"
        } else {
            "cancelled"
        }
    } else {
        *pick(rng, &catalog::FLIGHT_LEG_STATUSES[..2])
    };

    flight_leg::ActiveModel {
        id: ActiveValue::Set(ident::uuid(rng)),
        aircraft_id: ActiveValue::Set(craft.id.clone()),
        departure_airport: ActiveValue::Set(departure.to_string()),
        arrival_airport: ActiveValue::Set(arrival.to_string()),
        departure_time: ActiveValue::Set(departure_time),
        arrival_time: ActiveValue::Set(
            departure_time + Duration::minutes(flight_time_minutes as i64),
        ),
        flight_time_minutes: ActiveValue::Set(flight_time_minutes),
        distance_nm: ActiveValue::Set(distance_nm),
        is_empty_leg: ActiveValue::Set(is_empty_leg),
        empty_leg_price: ActiveValue::Set(empty_leg_price),
        status: ActiveValue::Set(status.to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
}

/// A customer's charter request.
pub fn charter_request(_index: usize, rng: &mut impl Rng) -> charter_request::ActiveModel {
    let now = catalog::now();
    let (departure, arrival) = catalog::route(rng);
    let profile = pick(rng, catalog::AIRCRAFT_PROFILES);

    let budget = if rng.random_bool(0.7) {
        Some(catalog::money(rng.random_range(10_000.0..=150_000.0)))
    } else {
        None
    };
    let special_requests = if rng.random_bool(0.4) {
        Some(pick(rng, catalog::SPECIAL_REQUESTS).to_string())
    } else {
        None
    };

    charter_request::ActiveModel {
        id: ActiveValue::Set(ident::uuid(rng)),
        customer_id: ActiveValue::Set(ident::customer_id(rng)),
        departure_airport: ActiveValue::Set(departure.to_string()),
        arrival_airport: ActiveValue::Set(arrival.to_string()),
        departure_date: ActiveValue::Set(catalog::days_from_now(rng, 3, 120)),
        passenger_count: ActiveValue::Set(rng.random_range(1..=profile.passengers.1)),
        aircraft_category: ActiveValue::Set(profile.category.to_string()),
        trip_type: ActiveValue::Set(pick(rng, catalog::TRIP_TYPES).to_string()),
        budget: ActiveValue::Set(budget),
        special_requests: ActiveValue::Set(special_requests),
        status: ActiveValue::Set(pick(rng, catalog::CHARTER_REQUEST_STATUSES).to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
}

/// A quote answering one of `requests`, priced from the aircraft's hourly rate.
pub fn pricing_quote(
    _index: usize,
    rng: &mut impl Rng,
    requests: &Parents<String>,
    aircraft: &Parents<AircraftRef>,
) -> pricing_quote::ActiveModel {
    let now = catalog::now();
    let craft = aircraft.pick(rng);
    let hours = flight_hours(rng);

    let base_price = catalog::money(craft.hourly_rate * hours);
    let fuel_surcharge = catalog::money(base_price * rng.random_range(0.08..=0.15));
    let landing_fees = catalog::money(rng.random_range(250.0..=1_500.0));
    let taxes = catalog::money((base_price + fuel_surcharge) * FEDERAL_EXCISE_TAX);
    let total_price = catalog::money(base_price + fuel_surcharge + landing_fees + taxes);

    pricing_quote::ActiveModel {
        id: ActiveValue::Set(ident::uuid(rng)),
        charter_request_id: ActiveValue::Set(requests.pick(rng).clone()),
        operator_id: ActiveValue::Set(craft.operator_id.clone()),
        aircraft_id: ActiveValue::Set(craft.id.clone()),
        base_price: ActiveValue::Set(base_price),
        fuel_surcharge: ActiveValue::Set(fuel_surcharge),
        taxes: ActiveValue::Set(taxes),
        total_price: ActiveValue::Set(total_price),
        currency: ActiveValue::Set(catalog::CURRENCY.to_string()),
        price_breakdown: ActiveValue::Set(Some(json!({
            "flight_hours": hours,
            "hourly_rate": craft.hourly_rate,
            "base_price": base_price,
            "fuel_surcharge": fuel_surcharge,
            "landing_fees": landing_fees,
            "federal_excise_tax": taxes,
        }))),
        valid_until: ActiveValue::Set(catalog::days_from_now(rng, 2, 14)),
        status: ActiveValue::Set(pick(rng, catalog::QUOTE_STATUSES).to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
}

/// A booking of one of `aircraft`, charged to its operator.
pub fn booking(
    _index: usize,
    rng: &mut impl Rng,
    aircraft: &Parents<AircraftRef>,
) -> booking::ActiveModel {
    let now = catalog::now();
    let craft = aircraft.pick(rng);
    let hours = flight_hours(rng);
    let passenger_count = rng.random_range(1..=craft.passenger_capacity.max(1));
    let subtotal = craft.hourly_rate * hours;
    let total_amount = catalog::money(subtotal * (1.0 + FEDERAL_EXCISE_TAX));
    let lead_passenger = catalog::person_name(rng);

    booking::ActiveModel {
        id: ActiveValue::Set(ident::uuid(rng)),
        aircraft_id: ActiveValue::Set(craft.id.clone()),
        operator_id: ActiveValue::Set(craft.operator_id.clone()),
        customer_id: ActiveValue::Set(ident::customer_id(rng)),
        booking_reference: ActiveValue::Set(ident::booking_reference(rng)),
        passenger_info: ActiveValue::Set(Some(json!({
            "lead_passenger": lead_passenger,
            "passenger_count": passenger_count,
            "pets": rng.random_bool(0.1),
        }))),
        total_amount: ActiveValue::Set(total_amount),
        currency: ActiveValue::Set(catalog::CURRENCY.to_string()),
        payment_status: ActiveValue::Set(pick(rng, catalog::PAYMENT_STATUSES).to_string()),
        status: ActiveValue::Set(pick(rng, catalog::BOOKING_STATUSES).to_string()),
        departure_date: ActiveValue::Set(catalog::days_from_now(rng, -30, 90)),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
}

/// A leg of one of `bookings`; the sequence cycles through 1 to 3 with `index`.
pub fn booking_leg(
    index: usize,
    rng: &mut impl Rng,
    bookings: &Parents<BookingRef>,
    flight_legs: &Parents<String>,
) -> booking_leg::ActiveModel {
    booking_leg::ActiveModel {
        id: ActiveValue::Set(ident::uuid(rng)),
        booking_id: ActiveValue::Set(bookings.pick(rng).id.clone()),
        flight_leg_id: ActiveValue::Set(flight_legs.pick(rng).clone()),
        leg_sequence: ActiveValue::Set((index % 3) as i32 + 1),
        passenger_count: ActiveValue::Set(rng.random_range(1..=12)),
        status: ActiveValue::Set(pick(rng, catalog::BOOKING_LEG_STATUSES).to_string()),
        created_at: ActiveValue::Set(catalog::now()),
    }
}

/// A money movement against one of `bookings`, in the booking's currency.
pub fn transaction(
    _index: usize,
    rng: &mut impl Rng,
    bookings: &Parents<BookingRef>,
) -> transaction::ActiveModel {
    let now = catalog::now();
    let booking = bookings.pick(rng);
    let transaction_type = *pick(rng, catalog::TRANSACTION_TYPES);

    let share = match transaction_type {
        "deposit" => rng.random_range(0.25..=0.5),
        "refund" => rng.random_range(0.1..=1.0),
        "payout" => rng.random_range(0.85..=0.92),
        _ => 1.0,
    };

    transaction::ActiveModel {
        id: ActiveValue::Set(ident::uuid(rng)),
        booking_id: ActiveValue::Set(booking.id.clone()),
        amount: ActiveValue::Set(catalog::money(booking.total_amount * share)),
        currency: ActiveValue::Set(booking.currency.clone()),
        transaction_type: ActiveValue::Set(transaction_type.to_string()),
        payment_method: ActiveValue::Set(pick(rng, catalog::PAYMENT_METHODS).to_string()),
        processor_reference: ActiveValue::Set(Some(ident::processor_reference(rng))),
        status: ActiveValue::Set(pick(rng, catalog::TRANSACTION_STATUSES).to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
}

use super::*;
use crate::fixture::charter;

#[test]
fn flight_legs_arrive_after_departure() {
    let aircraft = aircraft_refs();
    let mut rng = rng();

    for index in 0..50 {
        let row = charter::flight_leg(index, &mut rng, &aircraft);

        assert_ne!(value(row.departure_airport), value(row.arrival_airport));
        assert!(value(row.arrival_time) > value(row.departure_time));
        assert_eq!(value(row.is_empty_leg), value(row.empty_leg_price).is_some());
    }
}

#[test]
fn quotes_use_the_aircraft_operator() {
    let requests = ids("CR", 3);
    let aircraft = aircraft_refs();
    let mut rng = rng();

    for index in 0..50 {
        let row = charter::pricing_quote(index, &mut rng, &requests, &aircraft);
        let aircraft_id = value(row.aircraft_id);
        let operator_id = value(row.operator_id);
        let craft = aircraft
            .iter()
            .find(|a| a.id == aircraft_id)
            .expect("aircraft from pool");

        assert_eq!(craft.operator_id, operator_id);
        assert!(requests.iter().any(|id| *id == value(row.charter_request_id.clone())));
    }
}

#[test]
fn quote_total_adds_up() {
    let requests = ids("CR", 1);
    let aircraft = aircraft_refs();
    let mut rng = rng();

    let row = charter::pricing_quote(0, &mut rng, &requests, &aircraft);
    let base = value(row.base_price);
    let fuel = value(row.fuel_surcharge);
    let taxes = value(row.taxes);
    let total = value(row.total_price);
    let breakdown = value(row.price_breakdown).expect("breakdown");
    let landing = breakdown["landing_fees"].as_f64().expect("landing fees");

    assert!((base + fuel + landing + taxes - total).abs() < 0.02);
}

#[test]
fn booking_legs_cycle_sequence() {
    let bookings = booking_refs();
    let legs = ids("FL", 2);
    let mut rng = rng();

    let sequences: Vec<i32> = (0..6)
        .map(|index| value(charter::booking_leg(index, &mut rng, &bookings, &legs).leg_sequence))
        .collect();

    assert_eq!(sequences, vec![1, 2, 3, 1, 2, 3]);
}

#[test]
fn transactions_never_exceed_booking_total() {
    let bookings = booking_refs();
    let mut rng = rng();

    for index in 0..50 {
        let row = charter::transaction(index, &mut rng, &bookings);

        assert_eq!(value(row.booking_id), "BK_1");
        assert_eq!(value(row.currency), "USD");
        assert!(value(row.amount) <= 20_000.0);
    }
}

#[test]
fn same_seed_generates_same_rows() {
    let first = charter::charter_request(0, &mut rng());
    let second = charter::charter_request(0, &mut rng());

    assert_eq!(value(first.id), value(second.id));
    assert_eq!(value(first.customer_id), value(second.customer_id));
    assert_eq!(value(first.departure_airport), value(second.departure_airport));
}

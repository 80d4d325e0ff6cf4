use super::*;
use crate::fixture::{catalog, fleet};

#[test]
fn operators_have_unique_prefixes_per_index() {
    let mut rng = rng();

    let first = value(fleet::operator(0, &mut rng).name);
    let second = value(fleet::operator(1, &mut rng).name);

    assert!(first.starts_with(catalog::OPERATOR_NAME_PREFIXES[0]));
    assert!(second.starts_with(catalog::OPERATOR_NAME_PREFIXES[1]));
}

#[test]
fn operator_bases_start_at_headquarters() {
    let mut rng = rng();

    for index in 0..20 {
        let row = fleet::operator(index, &mut rng);
        let headquarters = value(row.headquarters);
        let bases = value(row.operating_bases);
        let bases = bases.as_array().expect("bases array");

        assert_eq!(bases[0], headquarters.as_str());
        assert!(bases.len() <= 4);
        assert!((3.5..=5.0).contains(&value(row.rating)));
    }
}

#[test]
fn aircraft_reference_fetched_operators() {
    let operators = ids("OP", 4);
    let mut rng = rng();

    for index in 0..50 {
        let row = fleet::aircraft(index, &mut rng, &operators);
        let operator_id = value(row.operator_id);
        let hourly_rate = value(row.hourly_rate);

        assert!(operators.iter().any(|id| *id == operator_id));
        assert!((2_000.0..=8_000.0).contains(&hourly_rate));
    }
}

#[test]
fn aircraft_follow_category_profile() {
    let operators = ids("OP", 1);
    let mut rng = rng();

    for index in 0..50 {
        let row = fleet::aircraft(index, &mut rng, &operators);
        let profile = catalog::profile_for(&value(row.category));
        let passengers = value(row.passenger_capacity);

        assert!(profile.models.contains(&value(row.model).as_str()));
        assert!((profile.passengers.0..=profile.passengers.1).contains(&passengers));
    }
}

#[test]
fn scheduled_maintenance_lies_ahead() {
    let aircraft = aircraft_refs();
    let mut rng = rng();
    let now = catalog::now();

    for index in 0..50 {
        let row = fleet::maintenance_record(index, &mut rng, &aircraft);
        let performed_at = value(row.performed_at);
        let next_due_at = value(row.next_due_at).expect("next due date");

        if value(row.status) == "scheduled" {
            assert!(performed_at > now);
        } else {
            assert!(performed_at < now);
        }
        assert!(next_due_at > performed_at);
    }
}

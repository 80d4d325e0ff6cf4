//! Operators, their aircraft and maintenance history.

use chrono::Duration;
use entity::{aircraft, maintenance_record, operator};
use rand::Rng;
use sea_orm::ActiveValue;
use serde_json::json;

use crate::fixture::{
    catalog::{self, pick, pick_many},
    ident,
    pool::{AircraftRef, Parents},
};

/// An operator; the name prefix cycles through the catalog with `index`.
pub fn operator(index: usize, rng: &mut impl Rng) -> operator::ActiveModel {
    let now = catalog::now();
    let prefix = catalog::OPERATOR_NAME_PREFIXES[index % catalog::OPERATOR_NAME_PREFIXES.len()];
    let name = format!("{} {}", prefix, pick(rng, catalog::OPERATOR_NAME_SUFFIXES));
    let headquarters = *pick(rng, catalog::AIRPORTS);

    let base_count = rng.random_range(1..=3);
    let mut bases = vec![headquarters];
    bases.extend(
        pick_many(rng, catalog::AIRPORTS, base_count)
            .into_iter()
            .filter(|base| *base != headquarters),
    );
    let certification_count = rng.random_range(1..=3);
    let certifications = pick_many(rng, catalog::CERTIFICATIONS, certification_count);

    operator::ActiveModel {
        id: ActiveValue::Set(ident::uuid(rng)),
        contact_email: ActiveValue::Set(Some(format!(
            "charter@{}.example.com",
            prefix.to_ascii_lowercase()
        ))),
        name: ActiveValue::Set(name),
        certificate_number: ActiveValue::Set(ident::certificate_number(rng)),
        headquarters: ActiveValue::Set(headquarters.to_string()),
        operating_bases: ActiveValue::Set(json!(bases)),
        certifications: ActiveValue::Set(json!(certifications)),
        fleet_size: ActiveValue::Set(rng.random_range(2..=45)),
        rating: ActiveValue::Set(catalog::round_to(rng.random_range(3.5..=5.0), 1)),
        status: ActiveValue::Set(pick(rng, catalog::OPERATOR_STATUSES).to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
}

/// An aircraft owned by one of `operators`, shaped by a random category profile.
pub fn aircraft(
    _index: usize,
    rng: &mut impl Rng,
    operators: &Parents<String>,
) -> aircraft::ActiveModel {
    let now = catalog::now();
    let profile = pick(rng, catalog::AIRCRAFT_PROFILES);

    aircraft::ActiveModel {
        id: ActiveValue::Set(ident::uuid(rng)),
        operator_id: ActiveValue::Set(operators.pick(rng).clone()),
        registration: ActiveValue::Set(ident::registration(rng)),
        model: ActiveValue::Set(pick(rng, profile.models).to_string()),
        category: ActiveValue::Set(profile.category.to_string()),
        passenger_capacity: ActiveValue::Set(
            rng.random_range(profile.passengers.0..=profile.passengers.1),
        ),
        range_nm: ActiveValue::Set(rng.random_range(profile.range_nm.0..=profile.range_nm.1)),
        cruise_speed_kts: ActiveValue::Set(
            rng.random_range(profile.cruise_speed_kts.0..=profile.cruise_speed_kts.1),
        ),
        hourly_rate: ActiveValue::Set(catalog::money(
            rng.random_range(profile.hourly_rate.0..=profile.hourly_rate.1),
        )),
        home_base: ActiveValue::Set(pick(rng, catalog::AIRPORTS).to_string()),
        year_built: ActiveValue::Set(rng.random_range(2005..=2024)),
        status: ActiveValue::Set(pick(rng, catalog::AIRCRAFT_STATUSES).to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
}

/// A maintenance event on one of `aircraft`.
pub fn maintenance_record(
    _index: usize,
    rng: &mut impl Rng,
    aircraft: &Parents<AircraftRef>,
) -> maintenance_record::ActiveModel {
    let now = catalog::now();
    let (maintenance_type, description, min_cost, max_cost) =
        *pick(rng, catalog::MAINTENANCE_EVENTS);
    let status = *pick(rng, catalog::MAINTENANCE_STATUSES);

    // Scheduled work lies ahead, everything else already happened
    let performed_at = if status == "scheduled" {
        catalog::days_from_now(rng, 1, 60)
    } else {
        catalog::days_from_now(rng, -365, -1)
    };
    let next_due_at = performed_at + Duration::days(rng.random_range(90..=365));

    maintenance_record::ActiveModel {
        id: ActiveValue::Set(ident::uuid(rng)),
        aircraft_id: ActiveValue::Set(aircraft.pick(rng).id.clone()),
        maintenance_type: ActiveValue::Set(maintenance_type.to_string()),
        description: ActiveValue::Set(description.to_string()),
        performed_at: ActiveValue::Set(performed_at),
        next_due_at: ActiveValue::Set(Some(next_due_at)),
        cost: ActiveValue::Set(catalog::money(rng.random_range(min_cost..=max_cost))),
        technician: ActiveValue::Set(Some(pick(rng, catalog::TECHNICIANS).to_string())),
        status: ActiveValue::Set(status.to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
}

//! Tests for seeding every charter table.

use std::collections::HashSet;

use charter_seed::data::parent::{ParentRepository, PARENT_FETCH_LIMIT};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QuerySelect};

use super::*;

fn plan() -> SeedPlan {
    SeedPlan::all().with_rng_seed(Some(42))
}

/// Tests seeding an empty database.
///
/// Verifies that every table reaches the target, parents before children, and that every
/// row was accepted by the foreign key checks.
///
/// Expected: Ok with 20 rows inserted into each of the 17 tables
#[tokio::test]
async fn seeds_every_table_to_target() -> Result<(), TestError> {
    let test = TestBuilder::new().with_charter_tables().build().await?;

    let service = SeedService::new(&test.db, test_settings(20), "public");
    let reports = service.run(&plan()).await.expect("seed run");

    assert_eq!(reports.len(), 17);
    for report in &reports {
        assert_eq!(report.outcome, PopulateOutcome::Completed, "{}", report);
        assert_eq!(report.attempted, 20, "{}", report);
        assert_eq!(report.inserted, 20, "{}", report);
        assert_eq!(report.failed, 0, "{}", report);
    }

    for table in SeedTable::ALL {
        assert_eq!(count_rows(&test.db, table).await?, 20, "{}", table);
    }

    Ok(())
}

/// Tests that seeding is idempotent.
///
/// Verifies that a second run at target attempts no rows and leaves counts unchanged.
///
/// Expected: Ok with every table reporting `0 rows needed`
#[tokio::test]
async fn rerun_attempts_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_charter_tables().build().await?;

    let service = SeedService::new(&test.db, test_settings(20), "public");
    service.run(&plan()).await.expect("first run");
    let reports = service.run(&plan()).await.expect("second run");

    for report in &reports {
        assert_eq!(report.outcome, PopulateOutcome::AlreadySatisfied);
        assert_eq!(report.attempted, 0);
        assert_eq!(report.to_string(), format!("{}: 0 rows needed (20 existing)", report.table));
    }

    for table in SeedTable::ALL {
        assert_eq!(count_rows(&test.db, table).await?, 20, "{}", table);
    }

    Ok(())
}

/// Values of one text column of an entity's table.
async fn column_values<E: EntityTrait>(
    db: &DatabaseConnection,
    column: E::Column,
) -> Result<Vec<String>, DbErr> {
    E::find().select_only().column(column).into_tuple().all(db).await
}

/// Ids of an entity's table as a set.
async fn id_set<E: EntityTrait>(
    db: &DatabaseConnection,
    column: E::Column,
) -> Result<HashSet<String>, DbErr> {
    Ok(column_values::<E>(db, column).await?.into_iter().collect())
}

fn assert_references(children: &[String], parents: &HashSet<String>, reference: &str) {
    assert_eq!(children.len(), 20, "{}", reference);
    for id in children {
        assert!(parents.contains(id), "{} points at missing row {}", reference, id);
    }
}

/// Tests that child rows only reference existing parents.
///
/// Verifies every foreign key column of every child table, and that quotes and bookings
/// name the operator owning their aircraft.
///
/// Expected: every reference resolves to a parent row
#[tokio::test]
async fn children_reference_existing_parents() -> Result<(), TestError> {
    use entity::{
        aircraft, aircraft_review, booking, booking_leg, charter_request, flight_leg,
        maintenance_record, operator, operator_review, pricing_quote, prelude::*,
        real_time_alert, transaction,
    };

    let test = TestBuilder::new().with_charter_tables().build().await?;

    let service = SeedService::new(&test.db, test_settings(20), "public");
    service.run(&plan()).await.expect("seed run");

    let db = &test.db;
    let operators = id_set::<Operator>(db, operator::Column::Id).await?;
    let aircraft_ids = id_set::<Aircraft>(db, aircraft::Column::Id).await?;
    let requests = id_set::<CharterRequest>(db, charter_request::Column::Id).await?;
    let flight_legs = id_set::<FlightLeg>(db, flight_leg::Column::Id).await?;
    let bookings = id_set::<Booking>(db, booking::Column::Id).await?;

    let references = [
        (
            "aircraft.operator_id",
            column_values::<Aircraft>(db, aircraft::Column::OperatorId).await?,
            &operators,
        ),
        (
            "flight_legs.aircraft_id",
            column_values::<FlightLeg>(db, flight_leg::Column::AircraftId).await?,
            &aircraft_ids,
        ),
        (
            "pricing_quotes.charter_request_id",
            column_values::<PricingQuote>(db, pricing_quote::Column::CharterRequestId).await?,
            &requests,
        ),
        (
            "pricing_quotes.operator_id",
            column_values::<PricingQuote>(db, pricing_quote::Column::OperatorId).await?,
            &operators,
        ),
        (
            "pricing_quotes.aircraft_id",
            column_values::<PricingQuote>(db, pricing_quote::Column::AircraftId).await?,
            &aircraft_ids,
        ),
        (
            "bookings.aircraft_id",
            column_values::<Booking>(db, booking::Column::AircraftId).await?,
            &aircraft_ids,
        ),
        (
            "bookings.operator_id",
            column_values::<Booking>(db, booking::Column::OperatorId).await?,
            &operators,
        ),
        (
            "booking_legs.booking_id",
            column_values::<BookingLeg>(db, booking_leg::Column::BookingId).await?,
            &bookings,
        ),
        (
            "booking_legs.flight_leg_id",
            column_values::<BookingLeg>(db, booking_leg::Column::FlightLegId).await?,
            &flight_legs,
        ),
        (
            "operator_reviews.operator_id",
            column_values::<OperatorReview>(db, operator_review::Column::OperatorId).await?,
            &operators,
        ),
        (
            "aircraft_reviews.aircraft_id",
            column_values::<AircraftReview>(db, aircraft_review::Column::AircraftId).await?,
            &aircraft_ids,
        ),
        (
            "maintenance_records.aircraft_id",
            column_values::<MaintenanceRecord>(db, maintenance_record::Column::AircraftId)
                .await?,
            &aircraft_ids,
        ),
        (
            "transactions.booking_id",
            column_values::<Transaction>(db, transaction::Column::BookingId).await?,
            &bookings,
        ),
        (
            "real_time_alerts.operator_id",
            column_values::<RealTimeAlert>(db, real_time_alert::Column::OperatorId).await?,
            &operators,
        ),
    ];

    for (reference, children, parents) in &references {
        assert_references(children, parents, reference);
    }

    let owners: HashSet<(String, String)> = Aircraft::find()
        .select_only()
        .columns([aircraft::Column::Id, aircraft::Column::OperatorId])
        .into_tuple()
        .all(db)
        .await?
        .into_iter()
        .collect();
    let quoted: Vec<(String, String)> = PricingQuote::find()
        .select_only()
        .columns([pricing_quote::Column::AircraftId, pricing_quote::Column::OperatorId])
        .into_tuple()
        .all(db)
        .await?;
    let booked: Vec<(String, String)> = Booking::find()
        .select_only()
        .columns([booking::Column::AircraftId, booking::Column::OperatorId])
        .into_tuple()
        .all(db)
        .await?;
    assert!(quoted.iter().chain(booked.iter()).all(|pair| owners.contains(pair)));

    Ok(())
}

/// Tests seeding children of a parent table larger than the fetch limit.
///
/// Verifies that children only draw from the first 20 parents the repository fetches.
///
/// Expected: every aircraft references one of the fetched operators
#[tokio::test]
async fn children_draw_from_fetched_parents() -> Result<(), TestError> {
    use entity::{aircraft, prelude::*};

    let test = TestBuilder::new()
        .with_table(Operator)
        .with_table(Aircraft)
        .with_mock_operators(25)
        .build()
        .await?;

    let fetched: HashSet<String> = ParentRepository::new(&test.db)
        .operators()
        .await?
        .require(SeedTable::Aircraft, SeedTable::Operators)
        .expect("operators present")
        .iter()
        .cloned()
        .collect();
    assert_eq!(fetched.len(), PARENT_FETCH_LIMIT as usize);

    let service = SeedService::new(&test.db, test_settings(20), "public");
    let reports = service
        .run(&SeedPlan::only(&[SeedTable::Operators, SeedTable::Aircraft]).with_rng_seed(Some(7)))
        .await
        .expect("seed run");

    assert_eq!(reports[0].outcome, PopulateOutcome::AlreadySatisfied);
    assert_eq!(reports[1].inserted, 20);

    let owners = column_values::<Aircraft>(&test.db, aircraft::Column::OperatorId).await?;
    assert_references(&owners, &fetched, "aircraft.operator_id");

    Ok(())
}

/// Tests resetting tables before seeding.
///
/// Expected: Ok with the pre-existing rows replaced by 20 fresh ones
#[tokio::test]
async fn reset_replaces_existing_rows() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Operator)
        .with_mock_operators(5)
        .build()
        .await?;

    let service = SeedService::new(&test.db, test_settings(20), "public");
    let plan = SeedPlan::only(&[SeedTable::Operators])
        .with_reset(true)
        .with_rng_seed(Some(1));
    let reports = service.run(&plan).await.expect("seed run");

    assert_eq!(reports[0].existing, 0);
    assert_eq!(reports[0].attempted, 20);
    assert_eq!(count_rows(&test.db, SeedTable::Operators).await?, 20);

    let kept = entity::prelude::Operator::find_by_id("OP_TEST_001")
        .one(&test.db)
        .await?;
    assert!(kept.is_none());

    Ok(())
}

/// Tests resetting a partially migrated database.
///
/// Verifies that a table missing from the database neither stops the reset of the other
/// tables nor the seeding that follows.
///
/// Expected: Ok with operators replaced and market analytics skipped
#[tokio::test]
async fn reset_skips_missing_tables() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Operator)
        .with_mock_operators(5)
        .build()
        .await?;

    let service = SeedService::new(&test.db, test_settings(20), "public");
    let plan = SeedPlan::only(&[SeedTable::Operators, SeedTable::MarketAnalytics])
        .with_reset(true)
        .with_rng_seed(Some(3));
    let reports = service.run(&plan).await.expect("seed run");

    assert_eq!(reports[0].outcome, PopulateOutcome::Completed);
    assert_eq!(reports[0].existing, 0);
    assert_eq!(reports[0].inserted, 20);
    assert_eq!(
        reports[1].outcome,
        PopulateOutcome::Skipped("table market_analytics does not exist".to_string())
    );
    assert_eq!(count_rows(&test.db, SeedTable::Operators).await?, 20);

    Ok(())
}

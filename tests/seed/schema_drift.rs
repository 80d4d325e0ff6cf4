//! Tests for seeding tables whose live columns differ from the entity.

use super::*;

/// Tests a live table missing a column the entity defines.
///
/// Expected: Ok with every row inserted without the dropped column
#[tokio::test]
async fn leaves_dropped_columns_unset() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sql(
            operators_table_sql("").replace("contact_email TEXT, ", ""),
        )
        .build()
        .await?;

    let service = SeedService::new(&test.db, test_settings(20), "public");
    let reports = service
        .run(&SeedPlan::only(&[SeedTable::Operators]))
        .await
        .expect("seed run");

    assert_eq!(reports[0].inserted, 20);
    assert_eq!(reports[0].failed, 0);
    assert_eq!(count_rows(&test.db, SeedTable::Operators).await?, 20);

    Ok(())
}

/// Tests a live table requiring a column the entity does not know.
///
/// Expected: Ok with the table skipped and nothing inserted
#[tokio::test]
async fn skips_tables_with_unknown_required_columns() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sql(operators_table_sql(", region TEXT NOT NULL"))
        .build()
        .await?;

    let service = SeedService::new(&test.db, test_settings(20), "public");
    let reports = service
        .run(&SeedPlan::only(&[SeedTable::Operators]))
        .await
        .expect("seed run");

    match &reports[0].outcome {
        PopulateOutcome::Skipped(reason) => assert!(reason.contains("region"), "{}", reason),
        other => panic!("expected skipped outcome, got {:?}", other),
    }
    assert_eq!(count_rows(&test.db, SeedTable::Operators).await?, 0);

    Ok(())
}

/// Tests seeding a table that does not exist.
///
/// Expected: Ok with the table skipped
#[tokio::test]
async fn reports_missing_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let service = SeedService::new(&test.db, test_settings(20), "public");
    let reports = service
        .run(&SeedPlan::only(&[SeedTable::MarketAnalytics]))
        .await
        .expect("seed run");

    assert_eq!(
        reports[0].outcome,
        PopulateOutcome::Skipped("table market_analytics does not exist".to_string())
    );

    Ok(())
}

/// Tests seeding children of a parent table missing columns they derive values from.
///
/// Verifies that flight legs are priced from the aircraft category when the aircraft
/// table has no hourly rate.
///
/// Expected: Ok with aircraft and flight legs both at target
#[tokio::test]
async fn seeds_children_of_drifted_parents() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Operator)
        .with_table(entity::prelude::FlightLeg)
        .with_sql(aircraft_table_sql("").replace("hourly_rate REAL NOT NULL, ", ""))
        .build()
        .await?;

    let service = SeedService::new(&test.db, test_settings(20), "public");
    let plan = SeedPlan::only(&[
        SeedTable::Operators,
        SeedTable::Aircraft,
        SeedTable::FlightLegs,
    ])
    .with_rng_seed(Some(11));
    let reports = service.run(&plan).await.expect("seed run");

    for report in &reports {
        assert_eq!(report.outcome, PopulateOutcome::Completed, "{}", report);
        assert_eq!(report.inserted, 20, "{}", report);
    }
    assert_eq!(count_rows(&test.db, SeedTable::FlightLegs).await?, 20);

    Ok(())
}

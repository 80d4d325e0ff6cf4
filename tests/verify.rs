//! Tests for row count verification.

use charter_seed::{
    model::{
        report::{Classification, VerificationReport},
        table::SeedTable,
    },
    service::verify::RowCountVerifier,
};
use charter_seed_test_utils::prelude::*;

fn classification(report: &VerificationReport, table: &str) -> Option<Classification> {
    report
        .tables
        .iter()
        .find(|entry| entry.table == table)
        .and_then(|entry| report.classify(entry))
}

/// Tests classifying tables by row count.
///
/// Expected: 20 operators are adequate, 1 aircraft is partial, flight legs are empty
#[tokio::test]
async fn classifies_tables() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Operator)
        .with_table(entity::prelude::Aircraft)
        .with_table(entity::prelude::FlightLeg)
        .with_mock_operators(20)
        .with_mock_aircraft("AC_TEST_001", "OP_TEST_001")
        .build()
        .await?;

    let report = RowCountVerifier::new(&test.db, 20)
        .verify(&[SeedTable::Operators, SeedTable::Aircraft, SeedTable::FlightLegs])
        .await;

    assert_eq!(classification(&report, "operators"), Some(Classification::Adequate));
    assert_eq!(classification(&report, "aircraft"), Some(Classification::Partial));
    assert_eq!(classification(&report, "flight_legs"), Some(Classification::Empty));
    assert!(!report.is_adequate());

    let output = report.to_string();
    assert!(output.contains("operators: 20 records | ADEQUATE"));
    assert!(output.contains("aircraft: 1 records | PARTIAL"));
    assert!(output.contains("flight_legs: 0 records | EMPTY"));

    Ok(())
}

/// Tests verifying a table that does not exist.
///
/// Expected: the table is reported as an error while the others are still counted
#[tokio::test]
async fn reports_missing_table_as_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Operator)
        .build()
        .await?;

    let report = RowCountVerifier::new(&test.db, 20)
        .verify(&[SeedTable::Operators, SeedTable::Bookings])
        .await;

    assert_eq!(classification(&report, "operators"), Some(Classification::Empty));
    assert!(report.tables[1].count.is_err());
    assert!(report.to_string().contains("bookings: ERROR |"));

    Ok(())
}

/// Tests verifying every charter table.
///
/// Expected: all 17 tables reported in parents-first order
#[tokio::test]
async fn verifies_every_table() -> Result<(), TestError> {
    let test = TestBuilder::new().with_charter_tables().build().await?;

    let report = RowCountVerifier::new(&test.db, 20).verify_all().await;

    let tables: Vec<&str> = report.tables.iter().map(|entry| entry.table).collect();
    let expected: Vec<&str> = SeedTable::ALL.iter().map(|table| table.name()).collect();
    assert_eq!(tables, expected);
    assert_eq!(report.count_of(Classification::Empty), 17);

    Ok(())
}

/// Tests counting a table missing some of the entity's columns.
///
/// Verifies that the count does not depend on the entity's column set.
///
/// Expected: the 20 rows of the drifted table are counted as adequate
#[tokio::test]
async fn counts_drifted_tables() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sql(
            "CREATE TABLE operators (\
               id TEXT NOT NULL PRIMARY KEY, \
               name TEXT NOT NULL, \
               status TEXT NOT NULL)",
        )
        .with_sql(
            "WITH RECURSIVE n(i) AS (SELECT 1 UNION ALL SELECT i + 1 FROM n WHERE i < 20) \
             INSERT INTO operators SELECT 'OP_' || i, 'Operator ' || i, 'active' FROM n",
        )
        .build()
        .await?;

    let report = RowCountVerifier::new(&test.db, 20)
        .verify(&[SeedTable::Operators])
        .await;

    assert_eq!(report.tables[0].count, Ok(20));
    assert_eq!(classification(&report, "operators"), Some(Classification::Adequate));

    Ok(())
}

//! Tests for ParentRepository.

use super::*;

/// Tests fetching parent ids with the default limit.
///
/// Verifies that at most 20 ids are fetched even when more rows exist.
///
/// Expected: Ok with 20 ids
#[tokio::test]
async fn limits_parent_ids() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Operator)
        .with_mock_operators(25)
        .build()
        .await?;

    let operators = ParentRepository::new(&test.db).operators().await?;

    assert_eq!(operators.len(), 20);

    Ok(())
}

/// Tests fetching parents from an empty table.
///
/// Expected: Ok with an empty pool
#[tokio::test]
async fn returns_empty_pool() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Operator)
        .build()
        .await?;

    let operators = ParentRepository::new(&test.db).with_limit(5).operators().await?;

    assert!(operators.is_empty());

    Ok(())
}

/// Tests fetching aircraft with the columns children derive values from.
///
/// Expected: Ok with the aircraft's operator, category and hourly rate
#[tokio::test]
async fn fetches_aircraft_references() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Operator)
        .with_table(entity::prelude::Aircraft)
        .with_mock_aircraft("AC_1", "OP_1")
        .build()
        .await?;

    let schema = SchemaRepository::new(&test.db, "public")
        .describe("aircraft")
        .await?;
    let aircraft = ParentRepository::new(&test.db).aircraft(&schema).await?;

    assert_eq!(aircraft.len(), 1);
    let parents = aircraft
        .require(
            crate::model::table::SeedTable::FlightLegs,
            crate::model::table::SeedTable::Aircraft,
        )
        .expect("aircraft present");
    let craft = parents.iter().next().expect("one aircraft");
    assert_eq!(craft.id, "AC_1");
    assert_eq!(craft.operator_id, "OP_1");
    assert_eq!(craft.category, "midsize_jet");
    assert_eq!(craft.hourly_rate, 4_500.0);

    Ok(())
}

/// Tests fetching aircraft from a table missing the rate column and holding NULL seats.
///
/// Verifies that only the live columns are selected and that missing values fall back to
/// the category's profile.
///
/// Expected: Ok with the heavy jet profile's mid rate and largest cabin
#[tokio::test]
async fn fetches_aircraft_from_drifted_table() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sql(
            "CREATE TABLE aircraft (\
               id TEXT NOT NULL PRIMARY KEY, \
               operator_id TEXT NOT NULL, \
               category TEXT NOT NULL, \
               passenger_capacity INTEGER)",
        )
        .with_sql("INSERT INTO aircraft VALUES ('AC_1', 'OP_1', 'heavy_jet', NULL)")
        .build()
        .await?;

    let schema = SchemaRepository::new(&test.db, "public")
        .describe("aircraft")
        .await?;
    let aircraft = ParentRepository::new(&test.db).aircraft(&schema).await?;

    let parents = aircraft
        .require(
            crate::model::table::SeedTable::FlightLegs,
            crate::model::table::SeedTable::Aircraft,
        )
        .expect("aircraft present");
    let craft = parents.iter().next().expect("one aircraft");
    assert_eq!(craft.id, "AC_1");
    assert_eq!(craft.operator_id, "OP_1");
    assert_eq!(craft.hourly_rate, 7_250.0);
    assert_eq!(craft.passenger_capacity, 16);

    Ok(())
}

/// Tests fetching bookings from a table holding only ids.
///
/// Expected: Ok with the fallback amount and currency
#[tokio::test]
async fn fetches_bookings_with_defaults() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sql("CREATE TABLE bookings (id TEXT NOT NULL PRIMARY KEY)")
        .with_sql("INSERT INTO bookings VALUES ('BK_1'), ('BK_2')")
        .build()
        .await?;

    let schema = SchemaRepository::new(&test.db, "public")
        .describe("bookings")
        .await?;
    let bookings = ParentRepository::new(&test.db).bookings(&schema).await?;

    assert_eq!(bookings.len(), 2);
    let parents = bookings
        .require(
            crate::model::table::SeedTable::Transactions,
            crate::model::table::SeedTable::Bookings,
        )
        .expect("bookings present");
    for booking in parents.iter() {
        assert_eq!(booking.total_amount, 25_000.0);
        assert_eq!(booking.currency, "USD");
    }

    Ok(())
}

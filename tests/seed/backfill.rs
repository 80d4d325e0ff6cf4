//! Tests for deficit-based backfilling and partial failures.

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use super::*;

/// Tests topping up a partially seeded table.
///
/// Verifies that exactly `target - existing` rows are generated.
///
/// Expected: Ok with 17 rows attempted and inserted
#[tokio::test]
async fn backfills_only_the_deficit() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Operator)
        .with_mock_operators(3)
        .build()
        .await?;

    let service = SeedService::new(&test.db, test_settings(20), "public");
    let reports = service
        .run(&SeedPlan::only(&[SeedTable::Operators]).with_rng_seed(Some(3)))
        .await
        .expect("seed run");

    assert_eq!(reports[0].existing, 3);
    assert_eq!(reports[0].attempted, 17);
    assert_eq!(reports[0].inserted, 17);
    assert_eq!(
        reports[0].to_string(),
        "operators: 17 rows needed, 17 inserted, 0 failed"
    );
    assert_eq!(count_rows(&test.db, SeedTable::Operators).await?, 20);

    Ok(())
}

/// Tests a table above target.
///
/// Expected: Ok with nothing attempted and the row count untouched
#[tokio::test]
async fn leaves_tables_above_target_untouched() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Operator)
        .with_mock_operators(25)
        .build()
        .await?;

    let service = SeedService::new(&test.db, test_settings(20), "public");
    let reports = service
        .run(&SeedPlan::only(&[SeedTable::Operators]))
        .await
        .expect("seed run");

    assert_eq!(reports[0].outcome, PopulateOutcome::AlreadySatisfied);
    assert_eq!(count_rows(&test.db, SeedTable::Operators).await?, 25);

    Ok(())
}

/// Tests seeding a child table whose parent table is empty.
///
/// Expected: Ok with the child table skipped and left empty
#[tokio::test]
async fn skips_children_without_parents() -> Result<(), TestError> {
    let test = TestBuilder::new().with_charter_tables().build().await?;

    let service = SeedService::new(&test.db, test_settings(20), "public");
    let reports = service
        .run(&SeedPlan::only(&[SeedTable::Aircraft]))
        .await
        .expect("seed run");

    assert_eq!(
        reports[0].outcome,
        PopulateOutcome::Skipped("no operators rows to reference from aircraft".to_string())
    );
    assert_eq!(count_rows(&test.db, SeedTable::Aircraft).await?, 0);

    Ok(())
}

/// Tests that a rejected row does not stop the rest of its batch.
///
/// The CHECK constraint rejects every operator named after the second name prefix, which
/// the factory uses for rows 1 and 13.
///
/// Expected: Ok with 18 rows inserted and 2 failed
#[tokio::test]
async fn tolerates_rejected_rows() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sql(operators_table_sql(
            ", CHECK (name NOT LIKE 'Atlantic%')",
        ))
        .build()
        .await?;

    let service = SeedService::new(&test.db, test_settings(20), "public");
    let reports = service
        .run(&SeedPlan::only(&[SeedTable::Operators]).with_rng_seed(Some(5)))
        .await
        .expect("seed run");

    assert_eq!(reports[0].outcome, PopulateOutcome::Completed);
    assert_eq!(reports[0].attempted, 20);
    assert_eq!(reports[0].inserted, 18);
    assert_eq!(reports[0].failed, 2);
    assert_eq!(count_rows(&test.db, SeedTable::Operators).await?, 18);

    Ok(())
}

/// Tests the simplified retry of a rejected row.
///
/// The CHECK constraint rejects any contact email; the retry leaves the optional column out.
///
/// Expected: Ok with all 20 rows inserted without contact email
#[tokio::test]
async fn retries_rows_without_optional_columns() -> Result<(), TestError> {
    use entity::operator::Column;

    let test = TestBuilder::new()
        .with_sql(operators_table_sql(", CHECK (contact_email IS NULL)"))
        .build()
        .await?;

    let service = SeedService::new(&test.db, test_settings(20), "public");
    let reports = service
        .run(&SeedPlan::only(&[SeedTable::Operators]).with_rng_seed(Some(5)))
        .await
        .expect("seed run");

    assert_eq!(reports[0].inserted, 20);
    assert_eq!(reports[0].failed, 0);

    let without_email = entity::prelude::Operator::find()
        .filter(Column::ContactEmail.is_null())
        .count(&test.db)
        .await?;
    assert_eq!(without_email, 20);

    Ok(())
}

/// Tests a child table at target whose parent table is empty.
///
/// Verifies that parents are only required when rows are actually needed.
///
/// Expected: Ok with aircraft already satisfied rather than skipped
#[tokio::test]
async fn satisfied_children_ignore_empty_parents() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Operator)
        .with_sql(aircraft_table_sql("").replace(" REFERENCES operators (id)", ""))
        .with_sql(
            "WITH RECURSIVE n(i) AS (SELECT 1 UNION ALL SELECT i + 1 FROM n WHERE i < 20) \
             INSERT INTO aircraft \
             SELECT 'AC_' || i, 'OP_GONE', 'N' || i, 'Citation XLS+', 'midsize_jet', 8, 2100, \
                    440, 4500.0, 'KTEB', 2018, 'available', '2026-01-01 00:00:00', \
                    '2026-01-01 00:00:00' \
             FROM n",
        )
        .build()
        .await?;

    let service = SeedService::new(&test.db, test_settings(20), "public");
    let reports = service
        .run(&SeedPlan::only(&[SeedTable::Aircraft]))
        .await
        .expect("seed run");

    assert_eq!(reports[0].outcome, PopulateOutcome::AlreadySatisfied);
    assert_eq!(reports[0].existing, 20);
    assert_eq!(reports[0].attempted, 0);

    Ok(())
}

/// Tests skipping a child below target whose parent table is empty.
///
/// Expected: Ok with the existing count kept in the skipped report
#[tokio::test]
async fn skipped_children_keep_existing_count() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Operator)
        .with_sql(aircraft_table_sql("").replace(" REFERENCES operators (id)", ""))
        .with_sql(
            "INSERT INTO aircraft VALUES ('AC_1', 'OP_GONE', 'N1', 'Citation XLS+', \
             'midsize_jet', 8, 2100, 440, 4500.0, 'KTEB', 2018, 'available', \
             '2026-01-01 00:00:00', '2026-01-01 00:00:00')",
        )
        .build()
        .await?;

    let service = SeedService::new(&test.db, test_settings(20), "public");
    let reports = service
        .run(&SeedPlan::only(&[SeedTable::Aircraft]))
        .await
        .expect("seed run");

    assert_eq!(
        reports[0].outcome,
        PopulateOutcome::Skipped("no operators rows to reference from aircraft".to_string())
    );
    assert_eq!(reports[0].existing, 1);
    assert_eq!(reports[0].attempted, 0);

    Ok(())
}

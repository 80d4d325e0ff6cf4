//! Declarative test builder.
//!
//! All configuration is queued and executed during the final `build()` call: tables first,
//! then raw SQL, then fixture rows, then mock endpoints.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_charter_tables: bool,
    sql: Vec<String>,

    // Database fixtures to insert
    operators: Vec<String>,
    aircraft: Vec<(String, String)>, // (aircraft_id, operator_id)

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    envelope_endpoints: Vec<(&'static str, String, serde_json::Value, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with nothing configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_charter_tables: false,
            sql: Vec::new(),
            operators: Vec::new(),
            aircraft: Vec::new(),
            mock_builders: Vec::new(),
            envelope_endpoints: Vec::new(),
        }
    }

    /// Add all 17 charter tables, created parents first.
    pub fn with_charter_tables(mut self) -> Self {
        self.include_charter_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables; parents must be added before children.
    ///
    /// ```no_run
    /// use charter_seed_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), charter_seed_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Operator)
    ///     .with_table(Aircraft)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Execute a raw SQL statement after the tables are created.
    pub fn with_sql(mut self, sql: impl Into<String>) -> Self {
        self.sql.push(sql.into());
        self
    }

    /// Insert an operator row with the given id.
    pub fn with_mock_operator(mut self, operator_id: impl Into<String>) -> Self {
        self.operators.push(operator_id.into());
        self
    }

    /// Insert `count` operator rows with ids `OP_TEST_001`, `OP_TEST_002`, ...
    pub fn with_mock_operators(mut self, count: usize) -> Self {
        let start = self.operators.len();
        self.operators
            .extend((start + 1..=start + count).map(|n| format!("OP_TEST_{:03}", n)));
        self
    }

    /// Insert an aircraft row owned by `operator_id`.
    ///
    /// The operator is created if it was not queued already.
    pub fn with_mock_aircraft(
        mut self,
        aircraft_id: impl Into<String>,
        operator_id: impl Into<String>,
    ) -> Self {
        self.aircraft.push((aircraft_id.into(), operator_id.into()));
        self
    }

    /// Add a mock endpoint answering with the charter service JSON envelope.
    ///
    /// # Arguments
    /// - `method` - HTTP method, e.g. `"GET"`
    /// - `path` - Request path, e.g. `"/api/tools"`
    /// - `envelope` - Response body
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_envelope_endpoint(
        mut self,
        method: &'static str,
        path: impl Into<String>,
        envelope: serde_json::Value,
        expected_requests: usize,
    ) -> Self {
        self.envelope_endpoints
            .push((method, path.into(), envelope, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation, raw SQL or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_charter_tables {
            all_tables.extend(charter_tables());
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;
        setup.with_sql(self.sql).await?;

        // 2. Insert database fixtures
        for operator_id in &self.operators {
            setup.charter().insert_mock_operator(operator_id).await?;
        }

        for (aircraft_id, operator_id) in &self.aircraft {
            if !self.operators.contains(operator_id) {
                setup.charter().insert_mock_operator(operator_id).await?;
            }
            setup
                .charter()
                .insert_mock_aircraft(aircraft_id, operator_id)
                .await?;
        }

        // 3. Create mock endpoints, custom ones first so sequential matching works
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (method, path, envelope, expected) in self.envelope_endpoints {
            mocks.push(
                setup
                    .charter()
                    .create_envelope_endpoint(method, &path, 200, &envelope, expected)?,
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// CREATE TABLE statements for every charter table, parents first.
fn charter_tables() -> Vec<TableCreateStatement> {
    use entity::prelude::*;

    let schema = Schema::new(DbBackend::Sqlite);
    vec![
        schema.create_table_from_entity(Operator),
        schema.create_table_from_entity(Aircraft),
        schema.create_table_from_entity(FlightLeg),
        schema.create_table_from_entity(CharterRequest),
        schema.create_table_from_entity(PricingQuote),
        schema.create_table_from_entity(Booking),
        schema.create_table_from_entity(BookingLeg),
        schema.create_table_from_entity(OperatorReview),
        schema.create_table_from_entity(AircraftReview),
        schema.create_table_from_entity(MaintenanceRecord),
        schema.create_table_from_entity(Transaction),
        schema.create_table_from_entity(MarketAnalytics),
        schema.create_table_from_entity(PricePrediction),
        schema.create_table_from_entity(DemandForecast),
        schema.create_table_from_entity(RealTimeAlert),
        schema.create_table_from_entity(NotificationPreference),
        schema.create_table_from_entity(UserBehaviorAnalytics),
    ]
}

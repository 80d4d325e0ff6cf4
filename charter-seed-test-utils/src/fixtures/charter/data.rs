//! Charter row insertion utilities.

use entity::{aircraft, operator};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel};

use crate::{
    error::TestError,
    fixtures::charter::{factory, CharterFixtures},
};

impl<'a> CharterFixtures<'a> {
    /// Insert a mock operator, returning the existing row if the id is already taken.
    ///
    /// # Returns
    /// - `Ok(operator::Model)` - The created or existing operator
    /// - `Err(TestError::DbErr)` - Database query or insert failed
    pub async fn insert_mock_operator(
        &self,
        operator_id: &str,
    ) -> Result<operator::Model, TestError> {
        if let Some(existing) = entity::prelude::Operator::find_by_id(operator_id)
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        let model = factory::mock_operator_model(operator_id).into_active_model();
        Ok(model.reset_all().insert(&self.setup.db).await?)
    }

    /// Insert a mock aircraft owned by an existing operator.
    ///
    /// # Returns
    /// - `Ok(aircraft::Model)` - The created or existing aircraft
    /// - `Err(TestError::DbErr)` - Insert failed, e.g. the operator does not exist
    pub async fn insert_mock_aircraft(
        &self,
        aircraft_id: &str,
        operator_id: &str,
    ) -> Result<aircraft::Model, TestError> {
        if let Some(existing) = entity::prelude::Aircraft::find_by_id(aircraft_id)
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        let model = factory::mock_aircraft_model(aircraft_id, operator_id).into_active_model();
        Ok(model.reset_all().insert(&self.setup.db).await?)
    }
}

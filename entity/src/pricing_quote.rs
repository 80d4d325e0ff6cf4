use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pricing_quotes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub charter_request_id: String,
    pub operator_id: String,
    pub aircraft_id: String,
    pub base_price: f64,
    pub fuel_surcharge: f64,
    pub taxes: f64,
    pub total_price: f64,
    pub currency: String,
    pub price_breakdown: Option<Json>,
    pub valid_until: DateTime,
    pub status: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::charter_request::Entity",
        from = "Column::CharterRequestId",
        to = "super::charter_request::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    CharterRequest,
    #[sea_orm(
        belongs_to = "super::operator::Entity",
        from = "Column::OperatorId",
        to = "super::operator::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Operator,
    #[sea_orm(
        belongs_to = "super::aircraft::Entity",
        from = "Column::AircraftId",
        to = "super::aircraft::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Aircraft,
}

impl Related<super::charter_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CharterRequest.def()
    }
}

impl Related<super::operator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Operator.def()
    }
}

impl Related<super::aircraft::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aircraft.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

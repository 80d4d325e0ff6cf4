use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "booking_legs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub booking_id: String,
    pub flight_leg_id: String,
    pub leg_sequence: i32,
    pub passenger_count: i32,
    pub status: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::booking::Entity",
        from = "Column::BookingId",
        to = "super::booking::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Booking,
    #[sea_orm(
        belongs_to = "super::flight_leg::Entity",
        from = "Column::FlightLegId",
        to = "super::flight_leg::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    FlightLeg,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl Related<super::flight_leg::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightLeg.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

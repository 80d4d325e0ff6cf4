use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000002_create_aircraft_table::Aircraft;

static IDX_FLIGHT_LEGS_AIRCRAFT_ID: &str = "idx-flight_legs-aircraft_id";
static FK_FLIGHT_LEGS_AIRCRAFT_ID: &str = "fk-flight_legs-aircraft_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FlightLegs::Table)
                    .if_not_exists()
                    .col(string(FlightLegs::Id).primary_key())
                    .col(string(FlightLegs::AircraftId))
                    .col(string(FlightLegs::DepartureAirport))
                    .col(string(FlightLegs::ArrivalAirport))
                    .col(timestamp(FlightLegs::DepartureTime))
                    .col(timestamp(FlightLegs::ArrivalTime))
                    .col(integer(FlightLegs::FlightTimeMinutes))
                    .col(integer(FlightLegs::DistanceNm))
                    .col(boolean(FlightLegs::IsEmptyLeg))
                    .col(double_null(FlightLegs::EmptyLegPrice))
                    .col(string(FlightLegs::Status))
                    .col(timestamp(FlightLegs::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(FlightLegs::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FLIGHT_LEGS_AIRCRAFT_ID)
                    .table(FlightLegs::Table)
                    .col(FlightLegs::AircraftId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FLIGHT_LEGS_AIRCRAFT_ID)
                    .from_tbl(FlightLegs::Table)
                    .from_col(FlightLegs::AircraftId)
                    .to_tbl(Aircraft::Table)
                    .to_col(Aircraft::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FLIGHT_LEGS_AIRCRAFT_ID)
                    .table(FlightLegs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FLIGHT_LEGS_AIRCRAFT_ID)
                    .table(FlightLegs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FlightLegs::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FlightLegs {
    Table,
    Id,
    AircraftId,
    DepartureAirport,
    ArrivalAirport,
    DepartureTime,
    ArrivalTime,
    FlightTimeMinutes,
    DistanceNm,
    IsEmptyLeg,
    EmptyLegPrice,
    Status,
    CreatedAt,
    UpdatedAt,
}

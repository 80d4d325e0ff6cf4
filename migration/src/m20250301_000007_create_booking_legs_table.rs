use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000006_create_bookings_table::Bookings;
use crate::m20250301_000003_create_flight_legs_table::FlightLegs;

static IDX_BOOKING_LEGS_BOOKING_ID: &str = "idx-booking_legs-booking_id";
static IDX_BOOKING_LEGS_FLIGHT_LEG_ID: &str = "idx-booking_legs-flight_leg_id";
static FK_BOOKING_LEGS_BOOKING_ID: &str = "fk-booking_legs-booking_id";
static FK_BOOKING_LEGS_FLIGHT_LEG_ID: &str = "fk-booking_legs-flight_leg_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookingLegs::Table)
                    .if_not_exists()
                    .col(string(BookingLegs::Id).primary_key())
                    .col(string(BookingLegs::BookingId))
                    .col(string(BookingLegs::FlightLegId))
                    .col(integer(BookingLegs::LegSequence))
                    .col(integer(BookingLegs::PassengerCount))
                    .col(string(BookingLegs::Status))
                    .col(timestamp(BookingLegs::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOKING_LEGS_BOOKING_ID)
                    .table(BookingLegs::Table)
                    .col(BookingLegs::BookingId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOKING_LEGS_BOOKING_ID)
                    .from_tbl(BookingLegs::Table)
                    .from_col(BookingLegs::BookingId)
                    .to_tbl(Bookings::Table)
                    .to_col(Bookings::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOKING_LEGS_FLIGHT_LEG_ID)
                    .table(BookingLegs::Table)
                    .col(BookingLegs::FlightLegId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOKING_LEGS_FLIGHT_LEG_ID)
                    .from_tbl(BookingLegs::Table)
                    .from_col(BookingLegs::FlightLegId)
                    .to_tbl(FlightLegs::Table)
                    .to_col(FlightLegs::Id)
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
                    .name(FK_BOOKING_LEGS_FLIGHT_LEG_ID)
                    .table(BookingLegs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOOKING_LEGS_FLIGHT_LEG_ID)
                    .table(BookingLegs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BOOKING_LEGS_BOOKING_ID)
                    .table(BookingLegs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOOKING_LEGS_BOOKING_ID)
                    .table(BookingLegs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BookingLegs::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BookingLegs {
    Table,
    Id,
    BookingId,
    FlightLegId,
    LegSequence,
    PassengerCount,
    Status,
    CreatedAt,
}

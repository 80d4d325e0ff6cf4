use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000002_create_aircraft_table::Aircraft;
use crate::m20250301_000001_create_operators_table::Operators;

static IDX_BOOKINGS_AIRCRAFT_ID: &str = "idx-bookings-aircraft_id";
static IDX_BOOKINGS_OPERATOR_ID: &str = "idx-bookings-operator_id";
static FK_BOOKINGS_AIRCRAFT_ID: &str = "fk-bookings-aircraft_id";
static FK_BOOKINGS_OPERATOR_ID: &str = "fk-bookings-operator_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(string(Bookings::Id).primary_key())
                    .col(string(Bookings::AircraftId))
                    .col(string(Bookings::OperatorId))
                    .col(string(Bookings::CustomerId))
                    .col(string_uniq(Bookings::BookingReference))
                    .col(json_binary_null(Bookings::PassengerInfo))
                    .col(double(Bookings::TotalAmount))
                    .col(string(Bookings::Currency))
                    .col(string(Bookings::PaymentStatus))
                    .col(string(Bookings::Status))
                    .col(timestamp(Bookings::DepartureDate))
                    .col(timestamp(Bookings::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Bookings::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOKINGS_AIRCRAFT_ID)
                    .table(Bookings::Table)
                    .col(Bookings::AircraftId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOKINGS_AIRCRAFT_ID)
                    .from_tbl(Bookings::Table)
                    .from_col(Bookings::AircraftId)
                    .to_tbl(Aircraft::Table)
                    .to_col(Aircraft::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOKINGS_OPERATOR_ID)
                    .table(Bookings::Table)
                    .col(Bookings::OperatorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOKINGS_OPERATOR_ID)
                    .from_tbl(Bookings::Table)
                    .from_col(Bookings::OperatorId)
                    .to_tbl(Operators::Table)
                    .to_col(Operators::Id)
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
                    .name(FK_BOOKINGS_OPERATOR_ID)
                    .table(Bookings::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOOKINGS_OPERATOR_ID)
                    .table(Bookings::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BOOKINGS_AIRCRAFT_ID)
                    .table(Bookings::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOOKINGS_AIRCRAFT_ID)
                    .table(Bookings::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Bookings {
    Table,
    Id,
    AircraftId,
    OperatorId,
    CustomerId,
    BookingReference,
    PassengerInfo,
    TotalAmount,
    Currency,
    PaymentStatus,
    Status,
    DepartureDate,
    CreatedAt,
    UpdatedAt,
}

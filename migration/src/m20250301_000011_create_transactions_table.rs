use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000006_create_bookings_table::Bookings;

static IDX_TRANSACTIONS_BOOKING_ID: &str = "idx-transactions-booking_id";
static FK_TRANSACTIONS_BOOKING_ID: &str = "fk-transactions-booking_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(string(Transactions::Id).primary_key())
                    .col(string(Transactions::BookingId))
                    .col(double(Transactions::Amount))
                    .col(string(Transactions::Currency))
                    .col(string(Transactions::TransactionType))
                    .col(string(Transactions::PaymentMethod))
                    .col(string_null(Transactions::ProcessorReference))
                    .col(string(Transactions::Status))
                    .col(timestamp(Transactions::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Transactions::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TRANSACTIONS_BOOKING_ID)
                    .table(Transactions::Table)
                    .col(Transactions::BookingId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TRANSACTIONS_BOOKING_ID)
                    .from_tbl(Transactions::Table)
                    .from_col(Transactions::BookingId)
                    .to_tbl(Bookings::Table)
                    .to_col(Bookings::Id)
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
                    .name(FK_TRANSACTIONS_BOOKING_ID)
                    .table(Transactions::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TRANSACTIONS_BOOKING_ID)
                    .table(Transactions::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Transactions {
    Table,
    Id,
    BookingId,
    Amount,
    Currency,
    TransactionType,
    PaymentMethod,
    ProcessorReference,
    Status,
    CreatedAt,
    UpdatedAt,
}

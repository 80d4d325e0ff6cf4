use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000004_create_charter_requests_table::CharterRequests;
use crate::m20250301_000001_create_operators_table::Operators;
use crate::m20250301_000002_create_aircraft_table::Aircraft;

static IDX_PRICING_QUOTES_CHARTER_REQUEST_ID: &str = "idx-pricing_quotes-charter_request_id";
static IDX_PRICING_QUOTES_OPERATOR_ID: &str = "idx-pricing_quotes-operator_id";
static IDX_PRICING_QUOTES_AIRCRAFT_ID: &str = "idx-pricing_quotes-aircraft_id";
static FK_PRICING_QUOTES_CHARTER_REQUEST_ID: &str = "fk-pricing_quotes-charter_request_id";
static FK_PRICING_QUOTES_OPERATOR_ID: &str = "fk-pricing_quotes-operator_id";
static FK_PRICING_QUOTES_AIRCRAFT_ID: &str = "fk-pricing_quotes-aircraft_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PricingQuotes::Table)
                    .if_not_exists()
                    .col(string(PricingQuotes::Id).primary_key())
                    .col(string(PricingQuotes::CharterRequestId))
                    .col(string(PricingQuotes::OperatorId))
                    .col(string(PricingQuotes::AircraftId))
                    .col(double(PricingQuotes::BasePrice))
                    .col(double(PricingQuotes::FuelSurcharge))
                    .col(double(PricingQuotes::Taxes))
                    .col(double(PricingQuotes::TotalPrice))
                    .col(string(PricingQuotes::Currency))
                    .col(json_binary_null(PricingQuotes::PriceBreakdown))
                    .col(timestamp(PricingQuotes::ValidUntil))
                    .col(string(PricingQuotes::Status))
                    .col(timestamp(PricingQuotes::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(PricingQuotes::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRICING_QUOTES_CHARTER_REQUEST_ID)
                    .table(PricingQuotes::Table)
                    .col(PricingQuotes::CharterRequestId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PRICING_QUOTES_CHARTER_REQUEST_ID)
                    .from_tbl(PricingQuotes::Table)
                    .from_col(PricingQuotes::CharterRequestId)
                    .to_tbl(CharterRequests::Table)
                    .to_col(CharterRequests::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRICING_QUOTES_OPERATOR_ID)
                    .table(PricingQuotes::Table)
                    .col(PricingQuotes::OperatorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PRICING_QUOTES_OPERATOR_ID)
                    .from_tbl(PricingQuotes::Table)
                    .from_col(PricingQuotes::OperatorId)
                    .to_tbl(Operators::Table)
                    .to_col(Operators::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRICING_QUOTES_AIRCRAFT_ID)
                    .table(PricingQuotes::Table)
                    .col(PricingQuotes::AircraftId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PRICING_QUOTES_AIRCRAFT_ID)
                    .from_tbl(PricingQuotes::Table)
                    .from_col(PricingQuotes::AircraftId)
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
                    .name(FK_PRICING_QUOTES_AIRCRAFT_ID)
                    .table(PricingQuotes::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRICING_QUOTES_AIRCRAFT_ID)
                    .table(PricingQuotes::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PRICING_QUOTES_OPERATOR_ID)
                    .table(PricingQuotes::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRICING_QUOTES_OPERATOR_ID)
                    .table(PricingQuotes::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PRICING_QUOTES_CHARTER_REQUEST_ID)
                    .table(PricingQuotes::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRICING_QUOTES_CHARTER_REQUEST_ID)
                    .table(PricingQuotes::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PricingQuotes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PricingQuotes {
    Table,
    Id,
    CharterRequestId,
    OperatorId,
    AircraftId,
    BasePrice,
    FuelSurcharge,
    Taxes,
    TotalPrice,
    Currency,
    PriceBreakdown,
    ValidUntil,
    Status,
    CreatedAt,
    UpdatedAt,
}

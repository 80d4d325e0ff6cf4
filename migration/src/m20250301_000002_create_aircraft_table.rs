use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000001_create_operators_table::Operators;

static IDX_AIRCRAFT_OPERATOR_ID: &str = "idx-aircraft-operator_id";
static FK_AIRCRAFT_OPERATOR_ID: &str = "fk-aircraft-operator_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Aircraft::Table)
                    .if_not_exists()
                    .col(string(Aircraft::Id).primary_key())
                    .col(string(Aircraft::OperatorId))
                    .col(string_uniq(Aircraft::Registration))
                    .col(string(Aircraft::Model))
                    .col(string(Aircraft::Category))
                    .col(integer(Aircraft::PassengerCapacity))
                    .col(integer(Aircraft::RangeNm))
                    .col(integer(Aircraft::CruiseSpeedKts))
                    .col(double(Aircraft::HourlyRate))
                    .col(string(Aircraft::HomeBase))
                    .col(integer(Aircraft::YearBuilt))
                    .col(string(Aircraft::Status))
                    .col(timestamp(Aircraft::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Aircraft::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AIRCRAFT_OPERATOR_ID)
                    .table(Aircraft::Table)
                    .col(Aircraft::OperatorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_AIRCRAFT_OPERATOR_ID)
                    .from_tbl(Aircraft::Table)
                    .from_col(Aircraft::OperatorId)
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
                    .name(FK_AIRCRAFT_OPERATOR_ID)
                    .table(Aircraft::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AIRCRAFT_OPERATOR_ID)
                    .table(Aircraft::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Aircraft::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Aircraft {
    Table,
    Id,
    OperatorId,
    Registration,
    Model,
    Category,
    PassengerCapacity,
    RangeNm,
    CruiseSpeedKts,
    HourlyRate,
    HomeBase,
    YearBuilt,
    Status,
    CreatedAt,
    UpdatedAt,
}

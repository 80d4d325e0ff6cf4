use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000001_create_operators_table::Operators;

static IDX_REAL_TIME_ALERTS_OPERATOR_ID: &str = "idx-real_time_alerts-operator_id";
static FK_REAL_TIME_ALERTS_OPERATOR_ID: &str = "fk-real_time_alerts-operator_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RealTimeAlerts::Table)
                    .if_not_exists()
                    .col(string(RealTimeAlerts::Id).primary_key())
                    .col(string(RealTimeAlerts::OperatorId))
                    .col(string(RealTimeAlerts::AlertType))
                    .col(string(RealTimeAlerts::Severity))
                    .col(string(RealTimeAlerts::Title))
                    .col(text(RealTimeAlerts::Message))
                    .col(boolean(RealTimeAlerts::IsRead))
                    .col(timestamp_null(RealTimeAlerts::ExpiresAt))
                    .col(timestamp(RealTimeAlerts::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REAL_TIME_ALERTS_OPERATOR_ID)
                    .table(RealTimeAlerts::Table)
                    .col(RealTimeAlerts::OperatorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REAL_TIME_ALERTS_OPERATOR_ID)
                    .from_tbl(RealTimeAlerts::Table)
                    .from_col(RealTimeAlerts::OperatorId)
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
                    .name(FK_REAL_TIME_ALERTS_OPERATOR_ID)
                    .table(RealTimeAlerts::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REAL_TIME_ALERTS_OPERATOR_ID)
                    .table(RealTimeAlerts::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RealTimeAlerts::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RealTimeAlerts {
    Table,
    Id,
    OperatorId,
    AlertType,
    Severity,
    Title,
    Message,
    IsRead,
    ExpiresAt,
    CreatedAt,
}

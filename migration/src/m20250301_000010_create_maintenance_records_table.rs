use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000002_create_aircraft_table::Aircraft;

static IDX_MAINTENANCE_RECORDS_AIRCRAFT_ID: &str = "idx-maintenance_records-aircraft_id";
static FK_MAINTENANCE_RECORDS_AIRCRAFT_ID: &str = "fk-maintenance_records-aircraft_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MaintenanceRecords::Table)
                    .if_not_exists()
                    .col(string(MaintenanceRecords::Id).primary_key())
                    .col(string(MaintenanceRecords::AircraftId))
                    .col(string(MaintenanceRecords::MaintenanceType))
                    .col(text(MaintenanceRecords::Description))
                    .col(timestamp(MaintenanceRecords::PerformedAt))
                    .col(timestamp_null(MaintenanceRecords::NextDueAt))
                    .col(double(MaintenanceRecords::Cost))
                    .col(string_null(MaintenanceRecords::Technician))
                    .col(string(MaintenanceRecords::Status))
                    .col(timestamp(MaintenanceRecords::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(MaintenanceRecords::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MAINTENANCE_RECORDS_AIRCRAFT_ID)
                    .table(MaintenanceRecords::Table)
                    .col(MaintenanceRecords::AircraftId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MAINTENANCE_RECORDS_AIRCRAFT_ID)
                    .from_tbl(MaintenanceRecords::Table)
                    .from_col(MaintenanceRecords::AircraftId)
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
                    .name(FK_MAINTENANCE_RECORDS_AIRCRAFT_ID)
                    .table(MaintenanceRecords::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MAINTENANCE_RECORDS_AIRCRAFT_ID)
                    .table(MaintenanceRecords::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MaintenanceRecords::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MaintenanceRecords {
    Table,
    Id,
    AircraftId,
    MaintenanceType,
    Description,
    PerformedAt,
    NextDueAt,
    Cost,
    Technician,
    Status,
    CreatedAt,
    UpdatedAt,
}

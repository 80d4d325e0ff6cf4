use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MarketAnalytics::Table)
                    .if_not_exists()
                    .col(string(MarketAnalytics::Id).primary_key())
                    .col(string(MarketAnalytics::Route))
                    .col(string(MarketAnalytics::AircraftCategory))
                    .col(timestamp(MarketAnalytics::PeriodStart))
                    .col(double(MarketAnalytics::AveragePrice))
                    .col(double(MarketAnalytics::DemandIndex))
                    .col(integer(MarketAnalytics::BookingVolume))
                    .col(double_null(MarketAnalytics::LoadFactor))
                    .col(timestamp(MarketAnalytics::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MarketAnalytics::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MarketAnalytics {
    Table,
    Id,
    Route,
    AircraftCategory,
    PeriodStart,
    AveragePrice,
    DemandIndex,
    BookingVolume,
    LoadFactor,
    CreatedAt,
}

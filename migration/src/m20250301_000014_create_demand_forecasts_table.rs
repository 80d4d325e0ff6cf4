use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DemandForecasts::Table)
                    .if_not_exists()
                    .col(string(DemandForecasts::Id).primary_key())
                    .col(string(DemandForecasts::AirportCode))
                    .col(timestamp(DemandForecasts::ForecastDate))
                    .col(integer(DemandForecasts::PredictedRequests))
                    .col(double(DemandForecasts::SeasonalityFactor))
                    .col(integer_null(DemandForecasts::ConfidenceLow))
                    .col(integer_null(DemandForecasts::ConfidenceHigh))
                    .col(timestamp(DemandForecasts::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DemandForecasts::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DemandForecasts {
    Table,
    Id,
    AirportCode,
    ForecastDate,
    PredictedRequests,
    SeasonalityFactor,
    ConfidenceLow,
    ConfidenceHigh,
    CreatedAt,
}

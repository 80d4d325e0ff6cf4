use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PricePredictions::Table)
                    .if_not_exists()
                    .col(string(PricePredictions::Id).primary_key())
                    .col(string(PricePredictions::Route))
                    .col(string(PricePredictions::AircraftCategory))
                    .col(timestamp(PricePredictions::PredictionDate))
                    .col(double(PricePredictions::PredictedPrice))
                    .col(double(PricePredictions::Confidence))
                    .col(string(PricePredictions::ModelVersion))
                    .col(json_binary_null(PricePredictions::Factors))
                    .col(timestamp(PricePredictions::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PricePredictions::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PricePredictions {
    Table,
    Id,
    Route,
    AircraftCategory,
    PredictionDate,
    PredictedPrice,
    Confidence,
    ModelVersion,
    Factors,
    CreatedAt,
}

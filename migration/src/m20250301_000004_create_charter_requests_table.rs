use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CharterRequests::Table)
                    .if_not_exists()
                    .col(string(CharterRequests::Id).primary_key())
                    .col(string(CharterRequests::CustomerId))
                    .col(string(CharterRequests::DepartureAirport))
                    .col(string(CharterRequests::ArrivalAirport))
                    .col(timestamp(CharterRequests::DepartureDate))
                    .col(integer(CharterRequests::PassengerCount))
                    .col(string(CharterRequests::AircraftCategory))
                    .col(string(CharterRequests::TripType))
                    .col(double_null(CharterRequests::Budget))
                    .col(text_null(CharterRequests::SpecialRequests))
                    .col(string(CharterRequests::Status))
                    .col(timestamp(CharterRequests::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(CharterRequests::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CharterRequests::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CharterRequests {
    Table,
    Id,
    CustomerId,
    DepartureAirport,
    ArrivalAirport,
    DepartureDate,
    PassengerCount,
    AircraftCategory,
    TripType,
    Budget,
    SpecialRequests,
    Status,
    CreatedAt,
    UpdatedAt,
}

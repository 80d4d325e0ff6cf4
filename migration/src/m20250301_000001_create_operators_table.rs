use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Operators::Table)
                    .if_not_exists()
                    .col(string(Operators::Id).primary_key())
                    .col(string(Operators::Name))
                    .col(string_uniq(Operators::CertificateNumber))
                    .col(string(Operators::Headquarters))
                    .col(json_binary(Operators::OperatingBases))
                    .col(json_binary(Operators::Certifications))
                    .col(integer(Operators::FleetSize))
                    .col(double(Operators::Rating))
                    .col(string(Operators::Status))
                    .col(string_null(Operators::ContactEmail))
                    .col(timestamp(Operators::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Operators::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Operators::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Operators {
    Table,
    Id,
    Name,
    CertificateNumber,
    Headquarters,
    OperatingBases,
    Certifications,
    FleetSize,
    Rating,
    Status,
    ContactEmail,
    CreatedAt,
    UpdatedAt,
}

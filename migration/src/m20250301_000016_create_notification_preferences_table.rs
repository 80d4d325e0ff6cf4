use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NotificationPreferences::Table)
                    .if_not_exists()
                    .col(string(NotificationPreferences::Id).primary_key())
                    .col(string(NotificationPreferences::UserId))
                    .col(string(NotificationPreferences::Channel))
                    .col(json_binary(NotificationPreferences::AlertTypes))
                    .col(double_null(NotificationPreferences::PriceThreshold))
                    .col(json_binary_null(NotificationPreferences::PreferredRoutes))
                    .col(boolean(NotificationPreferences::IsEnabled))
                    .col(timestamp(NotificationPreferences::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(NotificationPreferences::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NotificationPreferences::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum NotificationPreferences {
    Table,
    Id,
    UserId,
    Channel,
    AlertTypes,
    PriceThreshold,
    PreferredRoutes,
    IsEnabled,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserBehaviorAnalytics::Table)
                    .if_not_exists()
                    .col(string(UserBehaviorAnalytics::Id).primary_key())
                    .col(string(UserBehaviorAnalytics::UserId))
                    .col(string(UserBehaviorAnalytics::SessionId))
                    .col(string(UserBehaviorAnalytics::EventType))
                    .col(string(UserBehaviorAnalytics::Page))
                    .col(string_null(UserBehaviorAnalytics::Route))
                    .col(json_binary_null(UserBehaviorAnalytics::Metadata))
                    .col(integer(UserBehaviorAnalytics::DurationSeconds))
                    .col(timestamp(UserBehaviorAnalytics::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserBehaviorAnalytics::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UserBehaviorAnalytics {
    Table,
    Id,
    UserId,
    SessionId,
    EventType,
    Page,
    Route,
    Metadata,
    DurationSeconds,
    CreatedAt,
}

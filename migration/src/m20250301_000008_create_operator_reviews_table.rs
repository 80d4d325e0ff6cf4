use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000001_create_operators_table::Operators;

static IDX_OPERATOR_REVIEWS_OPERATOR_ID: &str = "idx-operator_reviews-operator_id";
static FK_OPERATOR_REVIEWS_OPERATOR_ID: &str = "fk-operator_reviews-operator_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OperatorReviews::Table)
                    .if_not_exists()
                    .col(string(OperatorReviews::Id).primary_key())
                    .col(string(OperatorReviews::OperatorId))
                    .col(string(OperatorReviews::ReviewerName))
                    .col(integer(OperatorReviews::Rating))
                    .col(string(OperatorReviews::Title))
                    .col(text_null(OperatorReviews::Comment))
                    .col(boolean(OperatorReviews::WouldRecommend))
                    .col(timestamp(OperatorReviews::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(OperatorReviews::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OPERATOR_REVIEWS_OPERATOR_ID)
                    .table(OperatorReviews::Table)
                    .col(OperatorReviews::OperatorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_OPERATOR_REVIEWS_OPERATOR_ID)
                    .from_tbl(OperatorReviews::Table)
                    .from_col(OperatorReviews::OperatorId)
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
                    .name(FK_OPERATOR_REVIEWS_OPERATOR_ID)
                    .table(OperatorReviews::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_OPERATOR_REVIEWS_OPERATOR_ID)
                    .table(OperatorReviews::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(OperatorReviews::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum OperatorReviews {
    Table,
    Id,
    OperatorId,
    ReviewerName,
    Rating,
    Title,
    Comment,
    WouldRecommend,
    CreatedAt,
    UpdatedAt,
}

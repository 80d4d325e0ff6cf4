use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000002_create_aircraft_table::Aircraft;

static IDX_AIRCRAFT_REVIEWS_AIRCRAFT_ID: &str = "idx-aircraft_reviews-aircraft_id";
static FK_AIRCRAFT_REVIEWS_AIRCRAFT_ID: &str = "fk-aircraft_reviews-aircraft_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AircraftReviews::Table)
                    .if_not_exists()
                    .col(string(AircraftReviews::Id).primary_key())
                    .col(string(AircraftReviews::AircraftId))
                    .col(string(AircraftReviews::ReviewerName))
                    .col(integer(AircraftReviews::Rating))
                    .col(integer_null(AircraftReviews::ComfortRating))
                    .col(integer_null(AircraftReviews::CleanlinessRating))
                    .col(text_null(AircraftReviews::Comment))
                    .col(timestamp(AircraftReviews::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(AircraftReviews::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AIRCRAFT_REVIEWS_AIRCRAFT_ID)
                    .table(AircraftReviews::Table)
                    .col(AircraftReviews::AircraftId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_AIRCRAFT_REVIEWS_AIRCRAFT_ID)
                    .from_tbl(AircraftReviews::Table)
                    .from_col(AircraftReviews::AircraftId)
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
                    .name(FK_AIRCRAFT_REVIEWS_AIRCRAFT_ID)
                    .table(AircraftReviews::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AIRCRAFT_REVIEWS_AIRCRAFT_ID)
                    .table(AircraftReviews::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AircraftReviews::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AircraftReviews {
    Table,
    Id,
    AircraftId,
    ReviewerName,
    Rating,
    ComfortRating,
    CleanlinessRating,
    Comment,
    CreatedAt,
    UpdatedAt,
}

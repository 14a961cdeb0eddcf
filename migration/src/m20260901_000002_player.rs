use sea_orm_migration::{prelude::*, schema::*};

static IDX_PLAYER_NATIONALITY: &str = "idx-player-nationality";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string(Player::FullName))
                    .col(date(Player::DateOfBirth))
                    .col(string(Player::Nationality))
                    .col(string(Player::CurrentClub))
                    .col(string(Player::CurrentLeague))
                    .col(small_integer(Player::LeagueBand))
                    .col(integer(Player::InternationalCaps))
                    .col(integer(Player::MinutesPlayed))
                    .col(boolean(Player::MedicalAvailable))
                    .col(boolean(Player::GpsAvailable))
                    .col(small_integer(Player::ScoreSchengen))
                    .col(small_integer(Player::ScoreUkGbe))
                    .col(small_integer(Player::ScoreUsP1))
                    .col(small_integer(Player::ScoreCanadaWorkPermit))
                    .col(small_integer(Player::ScoreUaeResidence))
                    .col(small_integer(Player::ScoreJapanSpecifiedSkilled))
                    .col(small_integer(Player::OverallScore))
                    .col(timestamp(Player::CreatedAt))
                    .col(timestamp(Player::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_NATIONALITY)
                    .table(Player::Table)
                    .col(Player::Nationality)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_NATIONALITY)
                    .table(Player::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    FullName,
    DateOfBirth,
    Nationality,
    CurrentClub,
    CurrentLeague,
    LeagueBand,
    InternationalCaps,
    MinutesPlayed,
    MedicalAvailable,
    GpsAvailable,
    ScoreSchengen,
    ScoreUkGbe,
    ScoreUsP1,
    ScoreCanadaWorkPermit,
    ScoreUaeResidence,
    ScoreJapanSpecifiedSkilled,
    OverallScore,
    CreatedAt,
    UpdatedAt,
}

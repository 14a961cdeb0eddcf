use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260901_000002_player::Player;

static FK_VIDEO_PLAYER_ID: &str = "fk-video-player_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Video::Table)
                    .if_not_exists()
                    .col(pk_auto(Video::Id))
                    .col(integer(Video::PlayerId))
                    .col(string(Video::Source))
                    .col(string_uniq(Video::ObjectPath))
                    .col(date(Video::MatchDate))
                    .col(string(Video::Opponent))
                    .col(string(Video::Competition))
                    .col(integer(Video::MinutesPlayed))
                    .col(boolean(Video::Processed))
                    .col(timestamp_null(Video::ProcessedAt))
                    .col(timestamp(Video::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VIDEO_PLAYER_ID)
                    .from_tbl(Video::Table)
                    .from_col(Video::PlayerId)
                    .to_tbl(Player::Table)
                    .to_col(Player::Id)
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
                    .name(FK_VIDEO_PLAYER_ID)
                    .table(Video::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Video::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Video {
    Table,
    Id,
    PlayerId,
    Source,
    ObjectPath,
    MatchDate,
    Opponent,
    Competition,
    MinutesPlayed,
    Processed,
    ProcessedAt,
    CreatedAt,
}

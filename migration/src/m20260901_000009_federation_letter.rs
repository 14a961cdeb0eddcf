use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260901_000002_player::Player;

static FK_FEDERATION_LETTER_PLAYER_ID: &str = "fk-federation_letter-player_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FederationLetter::Table)
                    .if_not_exists()
                    .col(pk_auto(FederationLetter::Id))
                    .col(integer(FederationLetter::PlayerId))
                    .col(string(FederationLetter::Federation))
                    .col(string(FederationLetter::Purpose))
                    .col(string(FederationLetter::Status))
                    .col(integer(FederationLetter::RequestedBy))
                    .col(integer_null(FederationLetter::HandledBy))
                    .col(timestamp(FederationLetter::CreatedAt))
                    .col(timestamp_null(FederationLetter::HandledAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FEDERATION_LETTER_PLAYER_ID)
                    .from_tbl(FederationLetter::Table)
                    .from_col(FederationLetter::PlayerId)
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
                    .name(FK_FEDERATION_LETTER_PLAYER_ID)
                    .table(FederationLetter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FederationLetter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FederationLetter {
    Table,
    Id,
    PlayerId,
    Federation,
    Purpose,
    Status,
    RequestedBy,
    HandledBy,
    CreatedAt,
    HandledAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260901_000001_pitchpass_user::PitchpassUser, m20260901_000002_player::Player,
};

static FK_SCOUTING_INQUIRY_PLAYER_ID: &str = "fk-scouting_inquiry-player_id";
static FK_SCOUTING_INQUIRY_CREATED_BY: &str = "fk-scouting_inquiry-created_by";
static FK_SCOUTING_MESSAGE_INQUIRY_ID: &str = "fk-scouting_message-inquiry_id";
static IDX_SCOUTING_MESSAGE_INQUIRY_ID: &str = "idx-scouting_message-inquiry_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScoutingInquiry::Table)
                    .if_not_exists()
                    .col(pk_auto(ScoutingInquiry::Id))
                    .col(integer(ScoutingInquiry::PlayerId))
                    .col(string(ScoutingInquiry::BuyingClub))
                    .col(string(ScoutingInquiry::SellingClub))
                    .col(string(ScoutingInquiry::Status))
                    .col(integer(ScoutingInquiry::CreatedBy))
                    .col(timestamp(ScoutingInquiry::CreatedAt))
                    .col(timestamp(ScoutingInquiry::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SCOUTING_INQUIRY_PLAYER_ID)
                    .from_tbl(ScoutingInquiry::Table)
                    .from_col(ScoutingInquiry::PlayerId)
                    .to_tbl(Player::Table)
                    .to_col(Player::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SCOUTING_INQUIRY_CREATED_BY)
                    .from_tbl(ScoutingInquiry::Table)
                    .from_col(ScoutingInquiry::CreatedBy)
                    .to_tbl(PitchpassUser::Table)
                    .to_col(PitchpassUser::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ScoutingMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(ScoutingMessage::Id))
                    .col(integer(ScoutingMessage::InquiryId))
                    .col(integer(ScoutingMessage::SenderId))
                    .col(text(ScoutingMessage::Body))
                    .col(timestamp(ScoutingMessage::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SCOUTING_MESSAGE_INQUIRY_ID)
                    .table(ScoutingMessage::Table)
                    .col(ScoutingMessage::InquiryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SCOUTING_MESSAGE_INQUIRY_ID)
                    .from_tbl(ScoutingMessage::Table)
                    .from_col(ScoutingMessage::InquiryId)
                    .to_tbl(ScoutingInquiry::Table)
                    .to_col(ScoutingInquiry::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScoutingMessage::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ScoutingInquiry::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ScoutingInquiry {
    Table,
    Id,
    PlayerId,
    BuyingClub,
    SellingClub,
    Status,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ScoutingMessage {
    Table,
    Id,
    InquiryId,
    SenderId,
    Body,
    CreatedAt,
}

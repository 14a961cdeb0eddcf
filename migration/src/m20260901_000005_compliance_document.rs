use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260901_000001_pitchpass_user::PitchpassUser, m20260901_000002_player::Player,
};

static FK_COMPLIANCE_DOCUMENT_PLAYER_ID: &str = "fk-compliance_document-player_id";
static FK_COMPLIANCE_DOCUMENT_CREATED_BY: &str = "fk-compliance_document-created_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ComplianceDocument::Table)
                    .if_not_exists()
                    .col(pk_auto(ComplianceDocument::Id))
                    .col(integer(ComplianceDocument::PlayerId))
                    .col(date(ComplianceDocument::PeriodStart))
                    .col(date(ComplianceDocument::PeriodEnd))
                    .col(text(ComplianceDocument::EligibilitySnapshot))
                    .col(string(ComplianceDocument::Status))
                    .col(integer(ComplianceDocument::CreatedBy))
                    .col(timestamp(ComplianceDocument::CreatedAt))
                    .col(timestamp_null(ComplianceDocument::SubmittedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COMPLIANCE_DOCUMENT_PLAYER_ID)
                    .from_tbl(ComplianceDocument::Table)
                    .from_col(ComplianceDocument::PlayerId)
                    .to_tbl(Player::Table)
                    .to_col(Player::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COMPLIANCE_DOCUMENT_CREATED_BY)
                    .from_tbl(ComplianceDocument::Table)
                    .from_col(ComplianceDocument::CreatedBy)
                    .to_tbl(PitchpassUser::Table)
                    .to_col(PitchpassUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_COMPLIANCE_DOCUMENT_CREATED_BY)
                    .table(ComplianceDocument::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_COMPLIANCE_DOCUMENT_PLAYER_ID)
                    .table(ComplianceDocument::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ComplianceDocument::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ComplianceDocument {
    Table,
    Id,
    PlayerId,
    PeriodStart,
    PeriodEnd,
    EligibilitySnapshot,
    Status,
    CreatedBy,
    CreatedAt,
    SubmittedAt,
}

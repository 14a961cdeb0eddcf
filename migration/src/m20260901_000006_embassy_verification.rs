use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260901_000001_pitchpass_user::PitchpassUser,
    m20260901_000005_compliance_document::ComplianceDocument,
};

static FK_EMBASSY_VERIFICATION_DOCUMENT_ID: &str = "fk-embassy_verification-document_id";
static FK_EMBASSY_VERIFICATION_REVIEWER_ID: &str = "fk-embassy_verification-reviewer_id";
static IDX_EMBASSY_VERIFICATION_STATUS: &str = "idx-embassy_verification-status";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmbassyVerification::Table)
                    .if_not_exists()
                    .col(pk_auto(EmbassyVerification::Id))
                    .col(integer_uniq(EmbassyVerification::DocumentId))
                    .col(string(EmbassyVerification::Status))
                    .col(string_uniq(EmbassyVerification::VerificationCode))
                    .col(integer_null(EmbassyVerification::ReviewerId))
                    .col(text_null(EmbassyVerification::Notes))
                    .col(timestamp(EmbassyVerification::CreatedAt))
                    .col(timestamp(EmbassyVerification::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EMBASSY_VERIFICATION_STATUS)
                    .table(EmbassyVerification::Table)
                    .col(EmbassyVerification::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EMBASSY_VERIFICATION_DOCUMENT_ID)
                    .from_tbl(EmbassyVerification::Table)
                    .from_col(EmbassyVerification::DocumentId)
                    .to_tbl(ComplianceDocument::Table)
                    .to_col(ComplianceDocument::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EMBASSY_VERIFICATION_REVIEWER_ID)
                    .from_tbl(EmbassyVerification::Table)
                    .from_col(EmbassyVerification::ReviewerId)
                    .to_tbl(PitchpassUser::Table)
                    .to_col(PitchpassUser::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EMBASSY_VERIFICATION_REVIEWER_ID)
                    .table(EmbassyVerification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EMBASSY_VERIFICATION_DOCUMENT_ID)
                    .table(EmbassyVerification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EMBASSY_VERIFICATION_STATUS)
                    .table(EmbassyVerification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EmbassyVerification::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum EmbassyVerification {
    Table,
    Id,
    DocumentId,
    Status,
    VerificationCode,
    ReviewerId,
    Notes,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260901_000001_pitchpass_user::PitchpassUser;

static FK_UPLOAD_SLOT_USER_ID: &str = "fk-upload_slot-user_id";
static IDX_UPLOAD_SLOT_EXPIRES_AT: &str = "idx-upload_slot-expires_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UploadSlot::Table)
                    .if_not_exists()
                    .col(pk_auto(UploadSlot::Id))
                    .col(string_uniq(UploadSlot::Token))
                    .col(string_uniq(UploadSlot::ObjectPath))
                    .col(integer(UploadSlot::UserId))
                    .col(string(UploadSlot::FileName))
                    .col(string(UploadSlot::ContentType))
                    .col(big_integer(UploadSlot::SizeBytes))
                    .col(timestamp(UploadSlot::ExpiresAt))
                    .col(timestamp_null(UploadSlot::UploadedAt))
                    .col(boolean(UploadSlot::Consumed))
                    .col(timestamp(UploadSlot::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_UPLOAD_SLOT_EXPIRES_AT)
                    .table(UploadSlot::Table)
                    .col(UploadSlot::ExpiresAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_UPLOAD_SLOT_USER_ID)
                    .from_tbl(UploadSlot::Table)
                    .from_col(UploadSlot::UserId)
                    .to_tbl(PitchpassUser::Table)
                    .to_col(PitchpassUser::Id)
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
                    .name(FK_UPLOAD_SLOT_USER_ID)
                    .table(UploadSlot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_UPLOAD_SLOT_EXPIRES_AT)
                    .table(UploadSlot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UploadSlot::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UploadSlot {
    Table,
    Id,
    Token,
    ObjectPath,
    UserId,
    FileName,
    ContentType,
    SizeBytes,
    ExpiresAt,
    UploadedAt,
    Consumed,
    CreatedAt,
}

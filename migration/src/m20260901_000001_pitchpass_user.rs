use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PitchpassUser::Table)
                    .if_not_exists()
                    .col(pk_auto(PitchpassUser::Id))
                    .col(string_uniq(PitchpassUser::Username))
                    .col(string(PitchpassUser::DisplayName))
                    .col(string(PitchpassUser::PasswordHash))
                    .col(string(PitchpassUser::Role))
                    .col(timestamp(PitchpassUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PitchpassUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PitchpassUser {
    Table,
    Id,
    Username,
    DisplayName,
    PasswordHash,
    Role,
    CreatedAt,
}

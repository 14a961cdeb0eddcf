use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260901_000001_pitchpass_user::PitchpassUser;

static FK_TOKEN_ACCOUNT_USER_ID: &str = "fk-token_account-user_id";
static FK_TOKEN_TRANSACTION_USER_ID: &str = "fk-token_transaction-user_id";
static IDX_TOKEN_TRANSACTION_USER_ID: &str = "idx-token_transaction-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TokenAccount::Table)
                    .if_not_exists()
                    .col(pk_auto(TokenAccount::Id))
                    .col(integer_uniq(TokenAccount::UserId))
                    .col(big_integer(TokenAccount::Balance))
                    .col(big_integer(TokenAccount::LifetimePurchased))
                    .col(big_integer(TokenAccount::LifetimeSpent))
                    .col(timestamp(TokenAccount::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TOKEN_ACCOUNT_USER_ID)
                    .from_tbl(TokenAccount::Table)
                    .from_col(TokenAccount::UserId)
                    .to_tbl(PitchpassUser::Table)
                    .to_col(PitchpassUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TokenTransaction::Table)
                    .if_not_exists()
                    .col(pk_auto(TokenTransaction::Id))
                    .col(integer(TokenTransaction::UserId))
                    .col(string(TokenTransaction::Kind))
                    .col(string(TokenTransaction::Action))
                    .col(big_integer(TokenTransaction::Amount))
                    .col(big_integer(TokenTransaction::BalanceAfter))
                    .col(string_null(TokenTransaction::Reference))
                    .col(timestamp(TokenTransaction::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TOKEN_TRANSACTION_USER_ID)
                    .table(TokenTransaction::Table)
                    .col(TokenTransaction::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TOKEN_TRANSACTION_USER_ID)
                    .from_tbl(TokenTransaction::Table)
                    .from_col(TokenTransaction::UserId)
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
            .drop_table(Table::drop().table(TokenTransaction::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TokenAccount::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TokenAccount {
    Table,
    Id,
    UserId,
    Balance,
    LifetimePurchased,
    LifetimeSpent,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TokenTransaction {
    Table,
    Id,
    UserId,
    Kind,
    Action,
    Amount,
    BalanceAfter,
    Reference,
    CreatedAt,
}

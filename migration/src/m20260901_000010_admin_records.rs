use sea_orm_migration::{prelude::*, schema::*};

static IDX_AUDIT_LOG_CREATED_AT: &str = "idx-audit_log-created_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuditLog::Table)
                    .if_not_exists()
                    .col(pk_auto(AuditLog::Id))
                    .col(integer_null(AuditLog::ActorId))
                    .col(string(AuditLog::Action))
                    .col(string(AuditLog::SubjectType))
                    .col(integer_null(AuditLog::SubjectId))
                    .col(text_null(AuditLog::Detail))
                    .col(timestamp(AuditLog::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AUDIT_LOG_CREATED_AT)
                    .table(AuditLog::Table)
                    .col(AuditLog::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FederationPayment::Table)
                    .if_not_exists()
                    .col(pk_auto(FederationPayment::Id))
                    .col(string(FederationPayment::Federation))
                    .col(string(FederationPayment::Description))
                    .col(big_integer(FederationPayment::Amount))
                    .col(string(FederationPayment::Currency))
                    .col(timestamp(FederationPayment::PaidAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FeeSchedule::Table)
                    .if_not_exists()
                    .col(pk_auto(FeeSchedule::Id))
                    .col(string(FeeSchedule::ActionCode))
                    .col(string(FeeSchedule::Description))
                    .col(big_integer(FeeSchedule::Amount))
                    .col(string(FeeSchedule::Currency))
                    .col(date(FeeSchedule::EffectiveFrom))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FeeSchedule::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(FederationPayment::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AUDIT_LOG_CREATED_AT)
                    .table(AuditLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AuditLog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AuditLog {
    Table,
    Id,
    ActorId,
    Action,
    SubjectType,
    SubjectId,
    Detail,
    CreatedAt,
}

#[derive(DeriveIden)]
enum FederationPayment {
    Table,
    Id,
    Federation,
    Description,
    Amount,
    Currency,
    PaidAt,
}

#[derive(DeriveIden)]
enum FeeSchedule {
    Table,
    Id,
    ActionCode,
    Description,
    Amount,
    Currency,
    EffectiveFrom,
}

use sea_orm::DatabaseConnection;

use crate::{
    model::admin::{AuditLogDto, FederationPaymentDto, FeeScheduleDto},
    server::{
        data::{admin::FinanceRepository, audit::AuditLogRepository},
        error::Error,
        service::retry::RetryContext,
    },
};

/// Most recent audit rows shown to administrators
const AUDIT_LOG_LIMIT: u64 = 200;

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn audit_logs(&self) -> Result<Vec<AuditLogDto>, Error> {
        let ctx = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry("list audit logs", || {
            let db = db.clone();

            Box::pin(async move {
                let logs = AuditLogRepository::new(&db).list(AUDIT_LOG_LIMIT).await?;

                Ok(logs
                    .into_iter()
                    .map(|log| AuditLogDto {
                        id: log.id,
                        actor_id: log.actor_id,
                        action: log.action,
                        subject_type: log.subject_type,
                        subject_id: log.subject_id,
                        detail: log.detail,
                        created_at: log.created_at,
                    })
                    .collect())
            })
        })
        .await
    }

    pub async fn payments(&self) -> Result<Vec<FederationPaymentDto>, Error> {
        let payments = FinanceRepository::new(self.db).list_payments().await?;

        Ok(payments
            .into_iter()
            .map(|payment| FederationPaymentDto {
                id: payment.id,
                federation: payment.federation,
                description: payment.description,
                amount: payment.amount,
                currency: payment.currency,
                paid_at: payment.paid_at,
            })
            .collect())
    }

    pub async fn fees(&self) -> Result<Vec<FeeScheduleDto>, Error> {
        let fees = FinanceRepository::new(self.db).list_fees().await?;

        Ok(fees
            .into_iter()
            .map(|fee| FeeScheduleDto {
                id: fee.id,
                action_code: fee.action_code,
                description: fee.description,
                amount: fee.amount,
                currency: fee.currency,
                effective_from: fee.effective_from,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    mod audit_logs {
        use pitchpass_test_utils::prelude::*;

        use crate::server::service::{admin::AdminService, audit};

        /// Expect the newest entry first
        #[tokio::test]
        async fn newest_first() -> Result<(), TestError> {
            let test = test_setup_with_all_tables!()?;

            audit::record(&test.state.db, 1, "player.create", "player", 1, None)
                .await
                .unwrap();
            audit::record(&test.state.db, 1, "player.update", "player", 1, None)
                .await
                .unwrap();

            let logs = AdminService::new(&test.state.db).audit_logs().await.unwrap();

            assert_eq!(logs.len(), 2);
            assert_eq!(logs[0].action, "player.update");

            Ok(())
        }
    }
}

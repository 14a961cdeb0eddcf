//! Read-only finance records shown in the admin area: federation payments and the fee schedule.

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
};

pub struct FinanceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FinanceRepository<'a, C> {
    /// Creates a new instance of [`FinanceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Newest payment first
    pub async fn list_payments(&self) -> Result<Vec<entity::federation_payment::Model>, DbErr> {
        entity::prelude::FederationPayment::find()
            .order_by_desc(entity::federation_payment::Column::PaidAt)
            .order_by_desc(entity::federation_payment::Column::Id)
            .all(self.db)
            .await
    }

    /// Ordered by action code, latest effective fee first within a code
    pub async fn list_fees(&self) -> Result<Vec<entity::fee_schedule::Model>, DbErr> {
        entity::prelude::FeeSchedule::find()
            .order_by_asc(entity::fee_schedule::Column::ActionCode)
            .order_by_desc(entity::fee_schedule::Column::EffectiveFrom)
            .all(self.db)
            .await
    }

    pub async fn create_payment(
        &self,
        federation: &str,
        description: &str,
        amount: i64,
        currency: &str,
        paid_at: NaiveDateTime,
    ) -> Result<entity::federation_payment::Model, DbErr> {
        entity::federation_payment::ActiveModel {
            federation: ActiveValue::Set(federation.to_string()),
            description: ActiveValue::Set(description.to_string()),
            amount: ActiveValue::Set(amount),
            currency: ActiveValue::Set(currency.to_string()),
            paid_at: ActiveValue::Set(paid_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn create_fee(
        &self,
        action_code: &str,
        description: &str,
        amount: i64,
        currency: &str,
        effective_from: NaiveDate,
    ) -> Result<entity::fee_schedule::Model, DbErr> {
        entity::fee_schedule::ActiveModel {
            action_code: ActiveValue::Set(action_code.to_string()),
            description: ActiveValue::Set(description.to_string()),
            amount: ActiveValue::Set(amount),
            currency: ActiveValue::Set(currency.to_string()),
            effective_from: ActiveValue::Set(effective_from),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn count_fees(&self) -> Result<u64, DbErr> {
        entity::prelude::FeeSchedule::find().count(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pitchpass_test_utils::prelude::*;

    use crate::server::data::admin::FinanceRepository;

    /// Expect the newest fee for a code to be listed before older ones
    #[tokio::test]
    async fn lists_latest_fee_first_per_code() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::FeeSchedule)?;
        let repository = FinanceRepository::new(&test.state.db);

        let old = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let new = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        repository
            .create_fee("transfer_filing", "Transfer filing", 2500, "EUR", old)
            .await?;
        repository
            .create_fee("transfer_filing", "Transfer filing", 3000, "EUR", new)
            .await?;
        repository
            .create_fee("itc_request", "ITC request", 1000, "EUR", old)
            .await?;

        let fees = repository.list_fees().await?;
        let amounts: Vec<i64> = fees.iter().map(|f| f.amount).collect();

        assert_eq!(amounts, vec![1000, 3000, 2500]);

        Ok(())
    }
}

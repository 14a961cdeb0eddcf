use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, OnConflict},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::model::token::TransactionKind;

pub struct TokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

/// Ledger row to append after a balance change
pub struct NewTokenTransaction<'s> {
    pub user_id: i32,
    pub kind: TransactionKind,
    pub action: &'s str,
    pub amount: i64,
    pub balance_after: i64,
    pub reference: Option<&'s str>,
}

impl<'a, C: ConnectionTrait> TokenRepository<'a, C> {
    /// Creates a new instance of [`TokenRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_account(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::token_account::Model>, DbErr> {
        entity::prelude::TokenAccount::find()
            .filter(entity::token_account::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Returns the user's account, opening an empty one when none exists
    ///
    /// Concurrent first requests race on the unique `user_id`; the losing insert is a no-op and
    /// both callers read back the same row.
    pub async fn get_or_create_account(
        &self,
        user_id: i32,
    ) -> Result<entity::token_account::Model, DbErr> {
        if let Some(account) = self.get_account(user_id).await? {
            return Ok(account);
        }

        let account = entity::token_account::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            balance: ActiveValue::Set(0),
            lifetime_purchased: ActiveValue::Set(0),
            lifetime_spent: ActiveValue::Set(0),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::TokenAccount::insert(account)
            .on_conflict(
                OnConflict::column(entity::token_account::Column::UserId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        self.get_account(user_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("token account for user {}", user_id)))
    }

    /// Deducts `amount` only when the balance covers it
    ///
    /// The check and deduction are a single conditional update so two concurrent spends can
    /// never drive the balance negative. Returns `false` when the balance is insufficient.
    pub async fn debit(&self, user_id: i32, amount: i64) -> Result<bool, DbErr> {
        let result = entity::prelude::TokenAccount::update_many()
            .col_expr(
                entity::token_account::Column::Balance,
                Expr::col(entity::token_account::Column::Balance).sub(amount),
            )
            .col_expr(
                entity::token_account::Column::LifetimeSpent,
                Expr::col(entity::token_account::Column::LifetimeSpent).add(amount),
            )
            .col_expr(
                entity::token_account::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::token_account::Column::UserId.eq(user_id))
            .filter(entity::token_account::Column::Balance.gte(amount))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    pub async fn credit(&self, user_id: i32, amount: i64) -> Result<(), DbErr> {
        entity::prelude::TokenAccount::update_many()
            .col_expr(
                entity::token_account::Column::Balance,
                Expr::col(entity::token_account::Column::Balance).add(amount),
            )
            .col_expr(
                entity::token_account::Column::LifetimePurchased,
                Expr::col(entity::token_account::Column::LifetimePurchased).add(amount),
            )
            .col_expr(
                entity::token_account::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::token_account::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn record_transaction(
        &self,
        transaction: NewTokenTransaction<'_>,
    ) -> Result<entity::token_transaction::Model, DbErr> {
        let transaction = entity::token_transaction::ActiveModel {
            user_id: ActiveValue::Set(transaction.user_id),
            kind: ActiveValue::Set(transaction.kind.as_str().to_string()),
            action: ActiveValue::Set(transaction.action.to_string()),
            amount: ActiveValue::Set(transaction.amount),
            balance_after: ActiveValue::Set(transaction.balance_after),
            reference: ActiveValue::Set(transaction.reference.map(str::to_string)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        transaction.insert(self.db).await
    }

    /// Newest first, up to `limit`
    pub async fn list_transactions(
        &self,
        user_id: i32,
        limit: u64,
    ) -> Result<Vec<entity::token_transaction::Model>, DbErr> {
        entity::prelude::TokenTransaction::find()
            .filter(entity::token_transaction::Column::UserId.eq(user_id))
            .order_by_desc(entity::token_transaction::Column::CreatedAt)
            .order_by_desc(entity::token_transaction::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }
}

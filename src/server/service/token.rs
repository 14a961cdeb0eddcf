use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::token::{
        TokenAction, TokenBalanceDto, TokenPackage, TokenTransactionDto, TransactionKind,
    },
    server::{
        data::token::{NewTokenTransaction, TokenRepository},
        error::{token::TokenError, Error},
        service::{audit, retry::RetryContext},
    },
};

/// Most recent ledger rows returned to the client
const TRANSACTION_PAGE: u64 = 100;

pub struct TokenService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TokenService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn balance(&self, user_id: i32) -> Result<TokenBalanceDto, Error> {
        let ctx = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("token balance for user ID {}", user_id), || {
            let db = db.clone();

            Box::pin(async move {
                let account = TokenRepository::new(&db)
                    .get_or_create_account(user_id)
                    .await?;

                Ok(balance_dto(&account))
            })
        })
        .await
    }

    pub async fn transactions(&self, user_id: i32) -> Result<Vec<TokenTransactionDto>, Error> {
        let transactions = TokenRepository::new(self.db)
            .list_transactions(user_id, TRANSACTION_PAGE)
            .await?;

        transactions
            .into_iter()
            .map(|t| {
                let kind = TransactionKind::parse(&t.kind).ok_or_else(|| {
                    Error::ParseError(format!("unknown transaction kind {:?}", t.kind))
                })?;

                Ok(TokenTransactionDto {
                    id: t.id,
                    kind,
                    action: t.action,
                    amount: t.amount,
                    balance_after: t.balance_after,
                    reference: t.reference,
                    created_at: t.created_at,
                })
            })
            .collect()
    }

    /// Spends the cost of `action`, failing with 402 when the balance does not cover it
    pub async fn spend(
        &self,
        user_id: i32,
        action: TokenAction,
        reference: Option<&str>,
    ) -> Result<TokenBalanceDto, Error> {
        let txn = self.db.begin().await?;

        let account = charge(&txn, user_id, action, reference).await?;
        audit::record(
            &txn,
            user_id,
            "tokens.spend",
            "token_account",
            account.id,
            Some(action.as_str().to_string()),
        )
        .await?;

        txn.commit().await?;

        Ok(balance_dto(&account))
    }

    pub async fn purchase(
        &self,
        user_id: i32,
        package: TokenPackage,
    ) -> Result<TokenBalanceDto, Error> {
        let txn = self.db.begin().await?;

        let account = credit(&txn, user_id, package).await?;
        audit::record(
            &txn,
            user_id,
            "tokens.purchase",
            "token_account",
            account.id,
            Some(package.as_str().to_string()),
        )
        .await?;

        txn.commit().await?;

        tracing::debug!(
            user_id = %user_id,
            "Credited {} tokens ({} package)",
            package.tokens(),
            package.as_str()
        );

        Ok(balance_dto(&account))
    }
}

/// Deducts the cost of `action` and appends a ledger row
///
/// Runs on the caller's connection so a charge can be part of a larger transaction; when the
/// surrounding work fails the charge rolls back with it.
pub async fn charge<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
    action: TokenAction,
    reference: Option<&str>,
) -> Result<entity::token_account::Model, Error> {
    let repository = TokenRepository::new(conn);
    let cost = action.cost();

    let account = repository.get_or_create_account(user_id).await?;

    if !repository.debit(user_id, cost).await? {
        tracing::debug!(
            user_id = %user_id,
            "Refused {} costing {} with balance {}",
            action.as_str(),
            cost,
            account.balance
        );

        return Err(TokenError::InsufficientTokens {
            cost,
            balance: account.balance,
        }
        .into());
    }

    let account = reload(&repository, user_id).await?;

    repository
        .record_transaction(NewTokenTransaction {
            user_id,
            kind: TransactionKind::Spend,
            action: action.as_str(),
            amount: cost,
            balance_after: account.balance,
            reference,
        })
        .await?;

    Ok(account)
}

/// Credits a purchase package and appends a ledger row
pub async fn credit<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
    package: TokenPackage,
) -> Result<entity::token_account::Model, Error> {
    let repository = TokenRepository::new(conn);

    repository.get_or_create_account(user_id).await?;
    repository.credit(user_id, package.tokens()).await?;

    let account = reload(&repository, user_id).await?;

    repository
        .record_transaction(NewTokenTransaction {
            user_id,
            kind: TransactionKind::Purchase,
            action: package.as_str(),
            amount: package.tokens(),
            balance_after: account.balance,
            reference: None,
        })
        .await?;

    Ok(account)
}

async fn reload<C: ConnectionTrait>(
    repository: &TokenRepository<'_, C>,
    user_id: i32,
) -> Result<entity::token_account::Model, Error> {
    repository.get_account(user_id).await?.ok_or_else(|| {
        Error::InternalError(format!(
            "Token account for user ID {} disappeared after update",
            user_id
        ))
    })
}

fn balance_dto(account: &entity::token_account::Model) -> TokenBalanceDto {
    TokenBalanceDto {
        balance: account.balance,
        lifetime_purchased: account.lifetime_purchased,
        lifetime_spent: account.lifetime_spent,
    }
}

#[cfg(test)]
mod tests {
    mod spend {
        use pitchpass_test_utils::prelude::*;

        use crate::{
            model::token::TokenAction,
            server::{
                error::{token::TokenError, Error},
                service::token::TokenService,
            },
        };

        /// Expect the cost to be deducted and a ledger row appended
        #[tokio::test]
        async fn deducts_cost_and_records_ledger() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let user = test.user().insert_user("scout", "scout").await?;
            test.token().insert_account(user.id, 12).await?;

            let service = TokenService::new(&test.state.db);
            let balance = service
                .spend(user.id, TokenAction::ComplianceReport, Some("player:4"))
                .await
                .unwrap();

            assert_eq!(balance.balance, 2);
            assert_eq!(balance.lifetime_spent, 10);

            let ledger = service.transactions(user.id).await.unwrap();
            assert_eq!(ledger.len(), 1);
            assert_eq!(ledger[0].balance_after, 2);
            assert_eq!(ledger[0].reference.as_deref(), Some("player:4"));

            Ok(())
        }

        /// Expect 402 and an untouched balance when tokens run short
        #[tokio::test]
        async fn refuses_insufficient_balance() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let user = test.user().insert_user("scout", "scout").await?;
            test.token().insert_account(user.id, 4).await?;

            let service = TokenService::new(&test.state.db);
            let result = service
                .spend(user.id, TokenAction::VideoAnalysis, None)
                .await;

            assert!(matches!(
                result,
                Err(Error::TokenError(TokenError::InsufficientTokens {
                    cost: 5,
                    balance: 4
                }))
            ));

            let balance = service.balance(user.id).await.unwrap();
            assert_eq!(balance.balance, 4);
            assert!(service.transactions(user.id).await.unwrap().is_empty());

            Ok(())
        }
    }

    mod purchase {
        use pitchpass_test_utils::prelude::*;

        use crate::{
            model::token::{TokenPackage, TransactionKind},
            server::service::token::TokenService,
        };

        /// Expect a first purchase to open the account and credit the package
        #[tokio::test]
        async fn credits_package_to_new_account() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let user = test.user().insert_user("team", "team").await?;

            let service = TokenService::new(&test.state.db);
            let balance = service.purchase(user.id, TokenPackage::Club).await.unwrap();

            assert_eq!(balance.balance, 200);
            assert_eq!(balance.lifetime_purchased, 200);

            let ledger = service.transactions(user.id).await.unwrap();
            assert_eq!(ledger[0].kind, TransactionKind::Purchase);
            assert_eq!(ledger[0].action, "club");

            Ok(())
        }
    }
}

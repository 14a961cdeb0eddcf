//! Client half of token spending.
//!
//! The check here only decides whether to offer an action. The server deducts atomically and
//! has the final say; a `402` from it means the cached balance was stale, so the balance is
//! refetched.

use dioxus::prelude::*;

use crate::{
    client::{api::ApiError, store::query::invalidate, store::toast::Toaster},
    model::token::{check_spend, SpendDecision, TokenAction, TokenBalanceDto, TOKEN_MUTATION_INVALIDATES},
};

pub fn cached_balance(balance: &Resource<Result<TokenBalanceDto, ApiError>>) -> Option<i64> {
    balance
        .read()
        .as_ref()
        .and_then(|result| result.as_ref().ok())
        .map(|balance| balance.balance)
}

/// Returns whether `action` may go ahead, toasting when the cached balance is too low
pub fn precheck(balance: Option<i64>, action: TokenAction, toaster: &mut Toaster) -> bool {
    match check_spend(balance, action) {
        SpendDecision::Allow { .. } => true,
        SpendDecision::Insufficient { cost, balance } => {
            toaster.error(format!(
                "Insufficient tokens: {} costs {}, you have {}",
                action.label(),
                cost,
                balance
            ));
            false
        }
    }
}

/// Refetches the balance and ledger after tokens changed hands
pub fn refresh_balance() {
    invalidate(TOKEN_MUTATION_INVALIDATES);
}

/// Toasts a failed request, refetching the balance when the server refused the spend
pub fn report_failure(error: &ApiError, action: &str, toaster: &mut Toaster) {
    if error.is_insufficient_tokens() {
        refresh_balance();
        toaster.error("Insufficient tokens");
    } else {
        toaster.error(format!("{} failed: {}", action, error.message));
    }
}

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use pitchpass::{
    model::{
        role::Role,
        token::{
            PurchaseTokensDto, SpendTokensDto, TokenAction, TokenBalanceDto, TokenPackage,
        },
    },
    server::controller::token::{get_balance, purchase_tokens, spend_tokens},
};
use pitchpass_test_utils::prelude::*;

use crate::util::{json_body, sign_in, status_of};

#[tokio::test]
/// Expect a new user to see an empty balance
async fn balance_starts_empty() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let coach = test.user().insert_user("coach", "team").await?;
    sign_in(&test, coach.id, Role::Team).await;

    let result = get_balance(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let balance: TokenBalanceDto = json_body(result.unwrap().into_response()).await;
    assert_eq!(balance.balance, 0);

    Ok(())
}

#[tokio::test]
/// Expect a purchase to credit the package and a spend to debit the action cost
async fn purchase_then_spend() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let coach = test.user().insert_user("coach", "team").await?;
    sign_in(&test, coach.id, Role::Team).await;

    let purchased = purchase_tokens(
        State(test.state()),
        test.session.clone(),
        Json(PurchaseTokensDto {
            package: TokenPackage::Starter,
        }),
    )
    .await;
    assert_eq!(status_of(purchased), StatusCode::OK);

    let spent = spend_tokens(
        State(test.state()),
        test.session.clone(),
        Json(SpendTokensDto {
            action: TokenAction::VideoAnalysis,
            reference: Some("video:1".to_string()),
        }),
    )
    .await;
    assert_eq!(status_of(spent), StatusCode::OK);

    let account = test.token().get_account(coach.id).await?.unwrap();
    assert_eq!(
        account.balance,
        TokenPackage::Starter.tokens() - TokenAction::VideoAnalysis.cost()
    );

    Ok(())
}

#[tokio::test]
/// Expect 402 when the balance is one token short
async fn spend_refused_below_cost() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let coach = test.user().insert_user("coach", "team").await?;
    test.token()
        .insert_account(coach.id, TokenAction::ComplianceReport.cost() - 1)
        .await?;
    sign_in(&test, coach.id, Role::Team).await;

    let result = spend_tokens(
        State(test.state()),
        test.session.clone(),
        Json(SpendTokensDto {
            action: TokenAction::ComplianceReport,
            reference: None,
        }),
    )
    .await;

    assert_eq!(status_of(result), StatusCode::PAYMENT_REQUIRED);

    Ok(())
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use pitchpass::{
    model::{player::PlayerDto, role::Role},
    server::controller::player::{get_player, list_players},
};
use pitchpass_test_utils::prelude::*;

use crate::util::{json_body, sign_in};

#[tokio::test]
/// Expect a scout's profile view to deduct one token
async fn scout_view_charges_token() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let scout = test.user().insert_user("scout", "scout").await?;
    let player = test.player().insert_player("Kofi Mensah", "Ghana").await?;
    test.token().insert_account(scout.id, 5).await?;
    sign_in(&test, scout.id, Role::Scout).await;

    let result = get_player(State(test.state()), test.session.clone(), Path(player.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: PlayerDto = json_body(resp).await;
    assert_eq!(body.id, player.id);

    let account = test.token().get_account(scout.id).await?.unwrap();
    assert_eq!(account.balance, 4);

    Ok(())
}

#[tokio::test]
/// Expect 402 and an untouched balance when a scout cannot afford the view
async fn scout_view_without_tokens_is_payment_required() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let agent = test.user().insert_user("agent", "agent").await?;
    let player = test.player().insert_player("Kofi Mensah", "Ghana").await?;
    test.token().insert_account(agent.id, 0).await?;
    sign_in(&test, agent.id, Role::Agent).await;

    let result = get_player(State(test.state()), test.session.clone(), Path(player.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::PAYMENT_REQUIRED);

    let account = test.token().get_account(agent.id).await?.unwrap();
    assert_eq!(account.balance, 0);

    Ok(())
}

#[tokio::test]
/// Expect club staff to view profiles for free
async fn team_view_is_free() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let coach = test.user().insert_user("coach", "team").await?;
    let player = test.player().insert_player("Lena Vogel", "Germany").await?;
    sign_in(&test, coach.id, Role::Team).await;

    let result = get_player(State(test.state()), test.session.clone(), Path(player.id)).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);
    assert!(test.token().get_account(coach.id).await?.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 404 for a player that does not exist
async fn view_missing_player_not_found() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let coach = test.user().insert_user("coach", "team").await?;
    sign_in(&test, coach.id, Role::Team).await;

    let result = get_player(State(test.state()), test.session.clone(), Path(404)).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

#[tokio::test]
/// Expect the embassy role to be refused the player list
async fn embassy_cannot_list_players() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let consul = test.user().insert_user("consul", "embassy").await?;
    sign_in(&test, consul.id, Role::Embassy).await;

    let result = list_players(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::FORBIDDEN
    );

    Ok(())
}

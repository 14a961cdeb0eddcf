use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use pitchpass::{
    model::{
        role::Role,
        user::{LoginDto, UserDto},
    },
    server::{
        controller::auth::{get_user, login, logout},
        model::session::{role::SessionUserRole, user::SessionUserId},
    },
};
use pitchpass_test_utils::prelude::*;

use crate::util::{json_body, sign_in};

fn credentials(username: &str, password: &str) -> Json<LoginDto> {
    Json(LoginDto {
        username: username.to_string(),
        password: password.to_string(),
    })
}

#[tokio::test]
/// Expect 200 and the database role stored in the session after a valid login
async fn login_stores_database_role() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::PitchpassUser)?;
    let user = test.user().insert_user("consul", "embassy").await?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        credentials("consul", factory::PASSWORD),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: UserDto = json_body(resp).await;
    assert_eq!(body.id, user.id);
    assert_eq!(body.role, Role::Embassy);

    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), Some(user.id));
    assert_eq!(
        SessionUserRole::get(&test.session).await.unwrap(),
        Some(Role::Embassy)
    );

    Ok(())
}

#[tokio::test]
/// Expect 401 for a wrong password and nothing written to the session
async fn login_rejects_wrong_password() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::PitchpassUser)?;
    test.user().insert_user("coach", "team").await?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        credentials("coach", "not-the-password"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

    Ok(())
}

#[tokio::test]
/// Expect 401 for a username that does not exist
async fn login_rejects_unknown_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::PitchpassUser)?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        credentials("nobody", factory::PASSWORD),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 401 when fetching the user without a session
async fn get_user_requires_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::PitchpassUser)?;

    let result = get_user(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect the signed-in user to be returned
async fn get_user_returns_signed_in_user() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::PitchpassUser)?;
    let user = test.user().insert_user("scout-ana", "scout").await?;
    sign_in(&test, user.id, Role::Scout).await;

    let result = get_user(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let body: UserDto = json_body(result.unwrap().into_response()).await;
    assert_eq!(body.username, "scout-ana");

    Ok(())
}

#[tokio::test]
/// Expect 204 and an empty session after logout
async fn logout_clears_session() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::PitchpassUser)?;
    let user = test.user().insert_user("coach", "team").await?;
    sign_in(&test, user.id, Role::Team).await;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::NO_CONTENT);
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

    Ok(())
}

#[tokio::test]
/// Expect 204 when logging out without ever signing in
async fn logout_without_session_succeeds() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::NO_CONTENT);

    Ok(())
}

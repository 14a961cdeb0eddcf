#![cfg(feature = "server")]

use axum::{
    body::to_bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pitchpass::{
    model::role::Role,
    server::{
        error::Error,
        model::session::{role::SessionUserRole, user::SessionUserId},
    },
};
use pitchpass_test_utils::prelude::*;
use serde::de::DeserializeOwned;

/// Signs a user into the test session the way the login endpoint does
pub async fn sign_in(test: &TestSetup, user_id: i32, role: Role) {
    SessionUserId::insert(&test.session, user_id).await.unwrap();
    SessionUserRole::insert(&test.session, role).await.unwrap();
}

/// Reads a JSON response body
pub async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

/// Status code a handler result would be served with
pub fn status_of<T: IntoResponse>(result: Result<T, Error>) -> StatusCode {
    match result {
        Ok(response) => response.into_response().status(),
        Err(error) => error.into_response().status(),
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::role::Role, server::error::error_response};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Invalid username or password for {0:?}")]
    InvalidCredentials(String),
    #[error("Role {role} may not access a resource restricted to {allowed:?}")]
    Forbidden {
        role: Role,
        allowed: &'static [Role],
    },
    #[error("Stored role {0:?} is not a known role")]
    UnknownRole(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Not signed in")
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                error_response(StatusCode::NOT_FOUND, "User not found")
            }
            Self::InvalidCredentials(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Invalid credentials")
            }
            Self::Forbidden { .. } => {
                tracing::debug!("{}", self);

                error_response(
                    StatusCode::FORBIDDEN,
                    "You do not have access to this resource",
                )
            }
            Self::UnknownRole(_) => super::InternalServerError(self).into_response(),
        }
    }
}

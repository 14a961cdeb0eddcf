//! Error types for the PitchPass server.
//!
//! Domain-specific errors live in submodules and are aggregated into [`Error`]. Every error
//! implements `IntoResponse` so controllers can return `Result<impl IntoResponse, Error>` and
//! rely on `?` for the HTTP mapping.

pub mod auth;
pub mod config;
pub mod retry;
pub mod token;
pub mod upload;
pub mod workflow;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, token::TokenError, upload::UploadError,
        workflow::WorkflowError,
    },
};

/// Main error type for the PitchPass server.
///
/// Aggregates the domain errors and the library errors the server can hit. `#[from]` lets
/// services and controllers propagate any of them with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Token balance error.
    #[error(transparent)]
    TokenError(#[from] TokenError),
    /// Two-phase upload error.
    #[error(transparent)]
    UploadError(#[from] UploadError),
    /// Status workflow error.
    #[error(transparent)]
    WorkflowError(#[from] WorkflowError),
    /// Request body failed validation; the message is shown to the user.
    #[error("{0}")]
    Validation(String),
    /// A referenced record does not exist.
    #[error("{0} not found")]
    NotFound(String),
    /// Failed to parse a stored value.
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in PitchPass.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis error from the session store or job tracker.
    #[error(transparent)]
    RedisError(#[from] fred::prelude::Error),
    /// Redis error from the background job queue.
    #[error(transparent)]
    ApalisRedisError(#[from] apalis_redis::RedisError),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
    /// Filesystem error while storing uploads.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// JSON encoding error for stored snapshots.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}

/// Maps errors onto HTTP responses.
///
/// Domain errors carry their own status codes; validation is 400, missing records 404 and
/// everything else a logged 500 with a generic body.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::TokenError(err) => err.into_response(),
            Self::UploadError(err) => err.into_response(),
            Self::WorkflowError(err) => err.into_response(),
            Self::Validation(message) => {
                tracing::debug!("Rejected request: {}", message);

                error_response(StatusCode::BAD_REQUEST, message)
            }
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, self.to_string()),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error body with the given status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error but returns a generic message so internals are not leaked.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

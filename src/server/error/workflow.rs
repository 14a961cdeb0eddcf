use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum WorkflowError {
    /// Requested status change is not a legal forward step
    #[error("Cannot move {subject} from {from} to {to}")]
    InvalidTransition {
        subject: &'static str,
        from: String,
        to: String,
    },
    /// Record already reached a final status and accepts no further changes
    #[error("The {subject} is {status} and can no longer be changed")]
    Closed {
        subject: &'static str,
        status: &'static str,
    },
}

impl IntoResponse for WorkflowError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        error_response(StatusCode::CONFLICT, self.to_string())
    }
}

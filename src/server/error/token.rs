use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Insufficient tokens: action costs {cost} but balance is {balance}")]
    InsufficientTokens { cost: i64, balance: i64 },
}

impl IntoResponse for TokenError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::InsufficientTokens { .. } => {
                error_response(StatusCode::PAYMENT_REQUIRED, "Insufficient tokens")
            }
        }
    }
}

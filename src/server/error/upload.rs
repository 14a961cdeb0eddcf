//! Errors raised while issuing upload destinations, receiving file bytes, and attaching
//! uploaded objects to video records.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Unsupported content type {0:?}, only video files may be uploaded")]
    UnsupportedContentType(String),
    #[error("Declared upload size {size} is outside 1..={max} bytes")]
    InvalidSize { size: i64, max: i64 },
    #[error("No upload slot exists for this destination")]
    SlotNotFound,
    #[error("Upload destination expired")]
    SlotExpired,
    #[error("A file has already been uploaded to this destination")]
    AlreadyUploaded,
    #[error("Upload body of {received} bytes exceeds declared size of {declared} bytes")]
    PayloadTooLarge { received: i64, declared: i64 },
    #[error("No file has been uploaded for object path {0:?}")]
    NotUploaded(String),
    #[error("Object {0:?} is already attached to a video")]
    AlreadyConsumed(String),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::UnsupportedContentType(_) | Self::InvalidSize { .. } => StatusCode::BAD_REQUEST,
            Self::SlotNotFound => StatusCode::NOT_FOUND,
            Self::SlotExpired => StatusCode::GONE,
            Self::AlreadyUploaded | Self::NotUploaded(_) | Self::AlreadyConsumed(_) => {
                StatusCode::CONFLICT
            }
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        };

        error_response(status, self.to_string())
    }
}

//! HTTP controller endpoints for the PitchPass web API.
//!
//! Axum handlers for every `/api` route. Controllers check the session role, hand the request to
//! a service and return JSON. They integrate with tower-sessions for session management and use
//! utoipa for OpenAPI documentation.

pub mod admin;
pub mod auth;
pub mod compliance;
pub mod dashboard;
pub mod embassy;
pub mod federation;
pub mod player;
pub mod scouting;
pub mod token;
pub mod upload;
pub mod util;
pub mod video;

//! Integration tests for the HTTP controllers.
//!
//! Handlers are called directly with an in-memory database and session, then converted into
//! responses so the status codes clients rely on are checked end to end.

mod auth;
mod player;
mod role;
mod token;
mod upload;

//! PitchPass library crate.
//!
//! Shared API models used by both the browser client and the server, plus the server itself
//! when built with the `server` feature.

pub mod model;

#[cfg(feature = "server")]
pub mod server;

//! Data access layer repositories.
//!
//! Repositories are thin wrappers over sea-orm queries, generic over [`sea_orm::ConnectionTrait`]
//! so services can run them against a pooled connection or inside a transaction. Status changes
//! are conditional updates (`WHERE status = <expected>`) and report whether a row moved, which is
//! what keeps concurrent transitions from skipping or reversing a workflow.

pub mod admin;
pub mod audit;
pub mod compliance;
pub mod embassy;
pub mod federation;
pub mod player;
pub mod scouting;
pub mod token;
pub mod upload;
pub mod user;
pub mod video;

//! Service layer for business logic.
//!
//! Services own the rules of each domain: status workflows, token charges, upload slot
//! lifecycles and audit logging. They coordinate repositories, run multi-step mutations inside
//! a database transaction and retry transient failures on reads.

pub mod admin;
pub mod audit;
pub mod auth;
pub mod compliance;
pub mod dashboard;
pub mod demo;
pub mod embassy;
pub mod federation;
pub mod player;
pub mod retry;
pub mod scouting;
pub mod token;
pub mod upload;
pub mod user;
pub mod video;
pub mod workflow;

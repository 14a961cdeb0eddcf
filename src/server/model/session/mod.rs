//! Session data models.
//!
//! Type-safe wrappers for the values PitchPass keeps in the tower-sessions store (Redis-backed
//! in production, in-memory in tests).

pub mod role;
pub mod user;

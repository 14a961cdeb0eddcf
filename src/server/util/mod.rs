//! Small helpers shared across services: password hashing and random token generation.

pub mod password;
pub mod random;

//! Utility functions for controller request handling.
//!
//! Session user retrieval for endpoints that return the signed-in user, and the role guard every
//! protected endpoint runs before calling into a service.

pub mod get_user;
pub mod role;

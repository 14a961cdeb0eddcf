//! Server application models and type definitions.
//!
//! Application state shared by the HTTP handlers, typed session entries and the background job
//! definitions pushed onto the worker queue.

pub mod app;
pub mod session;
pub mod worker;

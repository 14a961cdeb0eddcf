//! Server application core modules.
//!
//! This module contains all server-side functionality for PitchPass: HTTP routing, session based
//! authentication, database repositories, business services, the two-phase upload store,
//! background video analysis workers and the cron scheduler that feeds them.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
pub mod worker;

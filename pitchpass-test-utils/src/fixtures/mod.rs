//! Test fixture modules for database record creation.
//!
//! Each submodule adds an accessor on [`TestSetup`](crate::TestSetup) returning a fixture helper
//! that inserts rows with sensible defaults, e.g. `test.player().insert_player(..)`.

pub mod compliance;
pub mod factory;
pub mod player;
pub mod scouting;
pub mod token;
pub mod upload;
pub mod user;
pub mod video;

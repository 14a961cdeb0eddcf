//! Data types shared between the browser client and the server.
//!
//! Everything in here compiles for the `web` target, so it must stay free of server-only
//! dependencies. Request/response DTOs derive `utoipa::ToSchema` only when the `server`
//! feature is enabled.

pub mod admin;
pub mod api;
pub mod compliance;
pub mod country;
pub mod dashboard;
pub mod embassy;
pub mod federation;
pub mod player;
pub mod role;
pub mod scouting;
pub mod status;
pub mod token;
pub mod user;
pub mod video;

pub mod api;
pub mod app;
pub mod components;
pub mod router;
pub mod routes;
pub mod store;
pub mod upload;
pub mod util;

pub use app::App;

pub mod admin;
pub mod embassy;
pub mod federation;
pub mod home;
pub mod not_found;
pub mod scouting;
pub mod team;

pub use home::Home;
pub use not_found::NotFound;

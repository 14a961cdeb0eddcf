pub mod badge;
pub mod navbar;
pub mod page;
pub mod role_gate;
pub mod state;
pub mod toast;
pub mod world_map;

pub use badge::{BalanceBadge, StatusBadge};
pub use navbar::Navbar;
pub use page::Page;
pub use role_gate::RoleGate;
pub use state::{ErrorState, Loading};
pub use toast::ToastStack;
pub use world_map::WorldMap;

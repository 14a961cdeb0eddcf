pub mod letters;
pub mod map;
pub mod overview;

pub use letters::Letters;
pub use map::NationalityMap;
pub use overview::FederationOverview;

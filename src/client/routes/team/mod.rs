pub mod compliance;
pub mod dashboard;
pub mod player_detail;
pub mod players;
pub mod tokens;
pub mod videos;

pub use compliance::Compliance;
pub use dashboard::Dashboard;
pub use player_detail::PlayerDetail;
pub use players::Players;
pub use tokens::Tokens;
pub use videos::Videos;

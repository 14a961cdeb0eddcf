pub mod format;
pub mod spend;

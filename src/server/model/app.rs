use std::path::PathBuf;

use chrono::Duration;
use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub uploads: UploadSettings,
}

/// Where uploaded files land and how long an issued upload destination stays valid
#[derive(Clone, Debug)]
pub struct UploadSettings {
    pub root: PathBuf,
    pub slot_ttl: Duration,
    pub max_bytes: i64,
}

impl UploadSettings {
    pub const DEFAULT_SLOT_TTL_SECS: i64 = 15 * 60;
    pub const DEFAULT_MAX_BYTES: i64 = 2 * 1024 * 1024 * 1024;

    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            slot_ttl: Duration::seconds(Self::DEFAULT_SLOT_TTL_SECS),
            max_bytes: Self::DEFAULT_MAX_BYTES,
        }
    }
}

/// Allows test utilities to build an [`AppState`] without depending on this crate
impl From<(DatabaseConnection, PathBuf)> for AppState {
    fn from((db, upload_root): (DatabaseConnection, PathBuf)) -> Self {
        Self {
            db,
            uploads: UploadSettings::new(upload_root),
        }
    }
}

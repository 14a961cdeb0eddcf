use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum VideoSource {
    Manual,
    Partner,
}

impl VideoSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoSource::Manual => "manual",
            VideoSource::Partner => "partner",
        }
    }

    pub fn parse(value: &str) -> Option<VideoSource> {
        match value {
            "manual" => Some(VideoSource::Manual),
            "partner" => Some(VideoSource::Partner),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct VideoDto {
    pub id: i32,
    pub player_id: i32,
    pub source: VideoSource,
    pub file_url: String,
    pub match_date: NaiveDate,
    pub opponent: String,
    pub competition: String,
    pub minutes_played: i32,
    pub processed: bool,
    pub created_at: NaiveDateTime,
}

/// Phase one of an upload: describe the file to receive a write destination
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RequestUploadUrlDto {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UploadUrlDto {
    /// Destination the raw file bytes are `PUT` to
    pub upload_url: String,
    /// Path to reference when creating the video record
    pub object_path: String,
    pub expires_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateVideoDto {
    pub player_id: i32,
    pub object_path: String,
    pub source: VideoSource,
    pub match_date: NaiveDate,
    pub opponent: String,
    pub competition: String,
    pub minutes_played: i32,
}

pub fn is_video_content_type(content_type: &str) -> bool {
    content_type
        .trim()
        .to_ascii_lowercase()
        .strip_prefix("video/")
        .is_some_and(|subtype| !subtype.is_empty())
}

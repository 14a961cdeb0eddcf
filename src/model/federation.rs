use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::status::LetterStatus;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FederationLetterDto {
    pub id: i32,
    pub player_id: i32,
    pub player_name: String,
    pub federation: String,
    pub purpose: String,
    pub status: LetterStatus,
    pub created_at: NaiveDateTime,
    pub handled_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RequestLetterDto {
    pub player_id: i32,
    pub federation: String,
    pub purpose: String,
}

/// Number of registered players per nationality
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct NationalityCountDto {
    pub nationality: String,
    pub players: u32,
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::status::InquiryStatus;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ScoutingInquiryDto {
    pub id: i32,
    pub player_id: i32,
    pub player_name: String,
    pub buying_club: String,
    pub selling_club: String,
    pub status: InquiryStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateInquiryDto {
    pub player_id: i32,
    pub buying_club: String,
    pub selling_club: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AdvanceInquiryDto {
    pub status: InquiryStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ScoutingMessageDto {
    pub id: i32,
    pub inquiry_id: i32,
    pub sender_id: i32,
    pub body: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateMessageDto {
    pub body: String,
}

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DashboardStatsDto {
    pub players: u64,
    pub videos: u64,
    pub unprocessed_videos: u64,
    pub draft_documents: u64,
    pub pending_verifications: u64,
    pub open_inquiries: u64,
    pub token_balance: i64,
}

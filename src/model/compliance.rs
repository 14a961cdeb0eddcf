use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::{player::EligibilityScores, status::DocumentStatus};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ComplianceDocumentDto {
    pub id: i32,
    pub player_id: i32,
    pub player_name: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    /// Eligibility at the moment the document was generated
    pub snapshot: EligibilityScores,
    pub status: DocumentStatus,
    pub created_at: NaiveDateTime,
    pub submitted_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct GenerateDocumentDto {
    pub player_id: i32,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::status::VerificationStatus;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct EmbassyVerificationDto {
    pub id: i32,
    pub document_id: i32,
    pub player_name: String,
    pub status: VerificationStatus,
    pub verification_code: String,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ReviewDecisionDto {
    pub notes: Option<String>,
}

/// Actions an embassy officer can take on a verification row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmbassyAction {
    StartReview,
    Approve,
    Reject,
}

impl EmbassyAction {
    pub fn label(&self) -> &'static str {
        match self {
            EmbassyAction::StartReview => "Start review",
            EmbassyAction::Approve => "Approve",
            EmbassyAction::Reject => "Reject",
        }
    }

    /// Path segment of the endpoint performing this action
    pub fn endpoint(&self) -> &'static str {
        match self {
            EmbassyAction::StartReview => "review",
            EmbassyAction::Approve => "approve",
            EmbassyAction::Reject => "reject",
        }
    }
}

/// Actions offered for a row in `status`.
///
/// Approve and reject are only offered while the document is under review.
pub fn available_actions(status: VerificationStatus) -> &'static [EmbassyAction] {
    match status {
        VerificationStatus::Pending => &[EmbassyAction::StartReview],
        VerificationStatus::UnderReview => &[EmbassyAction::Approve, EmbassyAction::Reject],
        VerificationStatus::Approved | VerificationStatus::Rejected => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offers_decision(status: VerificationStatus) -> bool {
        available_actions(status)
            .iter()
            .any(|action| matches!(action, EmbassyAction::Approve | EmbassyAction::Reject))
    }

    #[test]
    fn decision_actions_only_under_review() {
        assert!(offers_decision(VerificationStatus::UnderReview));
        assert!(!offers_decision(VerificationStatus::Pending));
        assert!(!offers_decision(VerificationStatus::Approved));
        assert!(!offers_decision(VerificationStatus::Rejected));
    }

    #[test]
    fn terminal_rows_have_no_actions() {
        assert!(available_actions(VerificationStatus::Approved).is_empty());
        assert!(available_actions(VerificationStatus::Rejected).is_empty());
    }
}

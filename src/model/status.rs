//! Workflow status enums.
//!
//! Every status moves forward only. [`Workflow::can_transition_to`] is the single source of
//! truth for which step is legal; the server refuses anything else and the client only offers
//! actions for legal steps.

use std::fmt;

use serde::{Deserialize, Serialize};

pub trait Workflow: Copy + PartialEq + Sized + 'static {
    /// All states in workflow order.
    const STATES: &'static [Self];

    fn as_str(&self) -> &'static str;

    /// States reachable from `self` in one step.
    fn next_states(&self) -> &'static [Self];

    fn is_terminal(&self) -> bool {
        self.next_states().is_empty()
    }

    fn can_transition_to(&self, next: Self) -> bool {
        self.next_states().contains(&next)
    }

    fn parse(value: &str) -> Option<Self> {
        Self::STATES
            .iter()
            .copied()
            .find(|state| state.as_str() == value)
    }
}

macro_rules! impl_status_display {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

/// Compliance document lifecycle: `draft → submitted → verified | rejected`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Draft,
    Submitted,
    Verified,
    Rejected,
}

impl Workflow for DocumentStatus {
    const STATES: &'static [Self] = &[
        DocumentStatus::Draft,
        DocumentStatus::Submitted,
        DocumentStatus::Verified,
        DocumentStatus::Rejected,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "draft",
            DocumentStatus::Submitted => "submitted",
            DocumentStatus::Verified => "verified",
            DocumentStatus::Rejected => "rejected",
        }
    }

    fn next_states(&self) -> &'static [Self] {
        match self {
            DocumentStatus::Draft => &[DocumentStatus::Submitted],
            DocumentStatus::Submitted => &[DocumentStatus::Verified, DocumentStatus::Rejected],
            DocumentStatus::Verified | DocumentStatus::Rejected => &[],
        }
    }
}

/// Embassy review lifecycle: `pending → under_review → approved | rejected`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

impl Workflow for VerificationStatus {
    const STATES: &'static [Self] = &[
        VerificationStatus::Pending,
        VerificationStatus::UnderReview,
        VerificationStatus::Approved,
        VerificationStatus::Rejected,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::UnderReview => "under_review",
            VerificationStatus::Approved => "approved",
            VerificationStatus::Rejected => "rejected",
        }
    }

    fn next_states(&self) -> &'static [Self] {
        match self {
            VerificationStatus::Pending => &[VerificationStatus::UnderReview],
            VerificationStatus::UnderReview => {
                &[VerificationStatus::Approved, VerificationStatus::Rejected]
            }
            VerificationStatus::Approved | VerificationStatus::Rejected => &[],
        }
    }
}

/// Transfer inquiry lifecycle: `inquiry → negotiation → due_diligence → closed`
///
/// An open inquiry may also be closed early when talks break down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    Inquiry,
    Negotiation,
    DueDiligence,
    Closed,
}

impl Workflow for InquiryStatus {
    const STATES: &'static [Self] = &[
        InquiryStatus::Inquiry,
        InquiryStatus::Negotiation,
        InquiryStatus::DueDiligence,
        InquiryStatus::Closed,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            InquiryStatus::Inquiry => "inquiry",
            InquiryStatus::Negotiation => "negotiation",
            InquiryStatus::DueDiligence => "due_diligence",
            InquiryStatus::Closed => "closed",
        }
    }

    fn next_states(&self) -> &'static [Self] {
        match self {
            InquiryStatus::Inquiry => &[InquiryStatus::Negotiation],
            InquiryStatus::Negotiation => &[InquiryStatus::DueDiligence],
            InquiryStatus::DueDiligence => &[InquiryStatus::Closed],
            InquiryStatus::Closed => &[],
        }
    }
}

/// Federation letter lifecycle: `requested → issued | declined`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum LetterStatus {
    Requested,
    Issued,
    Declined,
}

impl Workflow for LetterStatus {
    const STATES: &'static [Self] = &[
        LetterStatus::Requested,
        LetterStatus::Issued,
        LetterStatus::Declined,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            LetterStatus::Requested => "requested",
            LetterStatus::Issued => "issued",
            LetterStatus::Declined => "declined",
        }
    }

    fn next_states(&self) -> &'static [Self] {
        match self {
            LetterStatus::Requested => &[LetterStatus::Issued, LetterStatus::Declined],
            LetterStatus::Issued | LetterStatus::Declined => &[],
        }
    }
}

impl_status_display!(DocumentStatus, VerificationStatus, InquiryStatus, LetterStatus);

#[cfg(test)]
mod tests {
    use super::*;

    /// Position of a state in workflow order
    fn position<S: Workflow>(state: S) -> usize {
        S::STATES.iter().position(|s| *s == state).unwrap()
    }

    fn assert_forward_only<S: Workflow + fmt::Debug>() {
        for from in S::STATES {
            for to in S::STATES {
                if from.can_transition_to(*to) {
                    assert!(
                        position(*to) > position(*from),
                        "{:?} -> {:?} moves backwards",
                        from,
                        to
                    );
                }
            }
        }
    }

    #[test]
    fn transitions_never_move_backwards() {
        assert_forward_only::<DocumentStatus>();
        assert_forward_only::<VerificationStatus>();
        assert_forward_only::<InquiryStatus>();
        assert_forward_only::<LetterStatus>();
    }

    #[test]
    fn terminal_states_accept_nothing() {
        assert!(DocumentStatus::Verified.is_terminal());
        assert!(DocumentStatus::Rejected.is_terminal());
        assert!(VerificationStatus::Approved.is_terminal());
        assert!(InquiryStatus::Closed.is_terminal());
        assert!(LetterStatus::Declined.is_terminal());
        assert!(!VerificationStatus::UnderReview.is_terminal());
    }

    #[test]
    fn verification_cannot_skip_review() {
        assert!(!VerificationStatus::Pending.can_transition_to(VerificationStatus::Approved));
        assert!(!VerificationStatus::Pending.can_transition_to(VerificationStatus::Rejected));
        assert!(VerificationStatus::UnderReview.can_transition_to(VerificationStatus::Approved));
    }

    #[test]
    fn parses_stored_values() {
        assert_eq!(
            VerificationStatus::parse("under_review"),
            Some(VerificationStatus::UnderReview)
        );
        assert_eq!(InquiryStatus::parse("due_diligence"), Some(InquiryStatus::DueDiligence));
        assert_eq!(DocumentStatus::parse("archived"), None);
    }
}

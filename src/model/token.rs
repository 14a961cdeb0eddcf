//! Token costs, purchase packages, and the advisory spend guard.
//!
//! The cost table is shared by client and server. The client consults it together with its
//! cached balance to decide whether to offer an action; the server deducts the same cost
//! atomically and has the final say.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Balances below this render with the destructive badge style
pub const LOW_BALANCE_THRESHOLD: i64 = 10;

/// Query cache keys that must be refetched after tokens are spent or purchased
pub const TOKEN_MUTATION_INVALIDATES: [&str; 2] =
    ["/api/tokens/balance", "/api/tokens/transactions"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum TokenAction {
    ProfileView,
    VideoAnalysis,
    Messaging,
    InquiryCreate,
    ComplianceReport,
}

impl TokenAction {
    pub const ALL: [TokenAction; 5] = [
        TokenAction::ProfileView,
        TokenAction::VideoAnalysis,
        TokenAction::Messaging,
        TokenAction::InquiryCreate,
        TokenAction::ComplianceReport,
    ];

    pub fn cost(&self) -> i64 {
        match self {
            TokenAction::ProfileView => 1,
            TokenAction::VideoAnalysis => 5,
            TokenAction::Messaging => 2,
            TokenAction::InquiryCreate => 3,
            TokenAction::ComplianceReport => 10,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenAction::ProfileView => "profile_view",
            TokenAction::VideoAnalysis => "video_analysis",
            TokenAction::Messaging => "messaging",
            TokenAction::InquiryCreate => "inquiry_create",
            TokenAction::ComplianceReport => "compliance_report",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TokenAction::ProfileView => "View player profile",
            TokenAction::VideoAnalysis => "Request video analysis",
            TokenAction::Messaging => "Send scouting message",
            TokenAction::InquiryCreate => "Open transfer inquiry",
            TokenAction::ComplianceReport => "Generate compliance report",
        }
    }

    pub fn parse(value: &str) -> Option<TokenAction> {
        TokenAction::ALL
            .into_iter()
            .find(|action| action.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum TokenPackage {
    Starter,
    Club,
    Federation,
}

impl TokenPackage {
    pub const ALL: [TokenPackage; 3] = [
        TokenPackage::Starter,
        TokenPackage::Club,
        TokenPackage::Federation,
    ];

    pub fn tokens(&self) -> i64 {
        match self {
            TokenPackage::Starter => 50,
            TokenPackage::Club => 200,
            TokenPackage::Federation => 1000,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenPackage::Starter => "starter",
            TokenPackage::Club => "club",
            TokenPackage::Federation => "federation",
        }
    }
}

/// Visual state of the balance badge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalanceBadge {
    Destructive,
    Secondary,
}

impl BalanceBadge {
    pub fn for_balance(balance: i64) -> Self {
        if balance < LOW_BALANCE_THRESHOLD {
            BalanceBadge::Destructive
        } else {
            BalanceBadge::Secondary
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            BalanceBadge::Destructive => "badge badge-error",
            BalanceBadge::Secondary => "badge badge-secondary",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpendDecision {
    /// Offer the action; `remaining` is the expected balance afterwards when known
    Allow { remaining: Option<i64> },
    Insufficient { cost: i64, balance: i64 },
}

/// Advisory check run before a gated action.
///
/// When the balance has not loaded yet the action is allowed and the server decides.
pub fn check_spend(cached_balance: Option<i64>, action: TokenAction) -> SpendDecision {
    let cost = action.cost();

    match cached_balance {
        None => SpendDecision::Allow { remaining: None },
        Some(balance) if balance >= cost => SpendDecision::Allow {
            remaining: Some(balance - cost),
        },
        Some(balance) => SpendDecision::Insufficient { cost, balance },
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TokenBalanceDto {
    pub balance: i64,
    pub lifetime_purchased: i64,
    pub lifetime_spent: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SpendTokensDto {
    pub action: TokenAction,
    /// Free-form reference to what the tokens were spent on, e.g. `player:12`
    pub reference: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PurchaseTokensDto {
    pub package: TokenPackage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Purchase,
    Spend,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Purchase => "purchase",
            TransactionKind::Spend => "spend",
        }
    }

    pub fn parse(value: &str) -> Option<TransactionKind> {
        match value {
            "purchase" => Some(TransactionKind::Purchase),
            "spend" => Some(TransactionKind::Spend),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TokenTransactionDto {
    pub id: i32,
    pub kind: TransactionKind,
    pub action: String,
    pub amount: i64,
    pub balance_after: i64,
    pub reference: Option<String>,
    pub created_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_is_destructive_below_threshold() {
        assert_eq!(BalanceBadge::for_balance(9), BalanceBadge::Destructive);
        assert_eq!(BalanceBadge::for_balance(10), BalanceBadge::Secondary);
        assert_eq!(BalanceBadge::for_balance(11), BalanceBadge::Secondary);
        assert_eq!(BalanceBadge::for_balance(0), BalanceBadge::Destructive);
    }

    #[test]
    fn spend_guard_allows_exact_balance() {
        let decision = check_spend(Some(5), TokenAction::VideoAnalysis);

        assert_eq!(decision, SpendDecision::Allow { remaining: Some(0) });
    }

    #[test]
    fn spend_guard_blocks_short_balance() {
        let decision = check_spend(Some(9), TokenAction::ComplianceReport);

        assert_eq!(
            decision,
            SpendDecision::Insufficient {
                cost: 10,
                balance: 9
            }
        );
    }

    #[test]
    fn spend_guard_defers_to_server_without_balance() {
        assert_eq!(
            check_spend(None, TokenAction::Messaging),
            SpendDecision::Allow { remaining: None }
        );
    }

    #[test]
    fn action_codes_round_trip_through_parse() {
        for action in TokenAction::ALL {
            assert_eq!(TokenAction::parse(action.as_str()), Some(action));
        }
        assert_eq!(TokenAction::parse("free_lunch"), None);
    }
}

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCoins;
use dioxus_free_icons::Icon;

use crate::{
    client::store::query::use_query,
    model::token::{BalanceBadge as BadgeStyle, TokenBalanceDto},
};

/// Current token balance, destructive while it is running low
#[component]
pub fn BalanceBadge() -> Element {
    let balance = use_query::<TokenBalanceDto>("/api/tokens/balance".to_string());

    let read = balance.read();
    let Some(Ok(balance)) = read.as_ref() else {
        return rsx!();
    };

    let class = BadgeStyle::for_balance(balance.balance).class();

    rsx!(
        span { class: "{class} gap-1",
            Icon {
                width: 12,
                height: 12,
                icon: FaCoins
            }
            "{balance.balance} tokens"
        }
    )
}

/// Colour-coded workflow status
#[component]
pub fn StatusBadge(status: String) -> Element {
    let class = match status.as_str() {
        "approved" | "verified" | "issued" => "badge badge-success",
        "rejected" | "declined" => "badge badge-error",
        "closed" => "badge badge-neutral",
        "draft" | "pending" | "requested" | "inquiry" => "badge badge-ghost",
        _ => "badge badge-info",
    };
    let label = status.replace('_', " ");

    rsx!(
        span { class: class, "{label}" }
    )
}

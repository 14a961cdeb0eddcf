use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{BalanceBadge, ErrorState, Loading, Page},
        router::Route,
        store::query::use_query,
    },
    model::{
        scouting::ScoutingInquiryDto,
        status::{InquiryStatus, Workflow},
        token::TokenAction,
    },
};

#[component]
pub fn ScoutingOverview() -> Element {
    let inquiries = use_query::<Vec<ScoutingInquiryDto>>("/api/scouting/inquiries".to_string());

    rsx!(
        Title { "Scouting | PitchPass" }
        Page { title: "Scouting",
            div { class: "flex items-center gap-2",
                "Balance"
                BalanceBadge {}
                Link { to: Route::Tokens {}, class: "link", "Buy tokens" }
            }
            match &*inquiries.read() {
                Some(Ok(inquiries)) => rsx!(
                    div { class: "stats bg-base-200",
                        {InquiryStatus::STATES.iter().map(|status| {
                            let label = status.as_str().replace('_', " ");
                            let count = inquiries.iter().filter(|i| i.status == *status).count();
                            rsx!(
                                div { key: "{label}", class: "stat",
                                    div { class: "stat-title capitalize", "{label}" }
                                    div { class: "stat-value", "{count}" }
                                }
                            )
                        })}
                    }
                ),
                Some(Err(e)) => rsx!(ErrorState { message: e.to_string() }),
                None => rsx!(Loading {}),
            }
            div { class: "card bg-base-200",
                div { class: "card-body",
                    h2 { class: "card-title", "Token costs" }
                    ul {
                        {TokenAction::ALL.into_iter().map(|action| {
                            let code = action.as_str();
                            let label = action.label();
                            let cost = action.cost();
                            rsx!(li { key: "{code}", "{label}: {cost}" })
                        })}
                    }
                }
            }
            div { class: "flex gap-2",
                Link { to: Route::Players {}, class: "btn btn-outline", "Browse players" }
                Link { to: Route::Inquiries {}, class: "btn btn-primary", "Transfer inquiries" }
            }
        }
    )
}

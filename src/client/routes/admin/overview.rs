use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{ErrorState, Loading, Page},
        router::Route,
        store::query::use_query,
    },
    model::dashboard::DashboardStatsDto,
};

#[component]
fn SectionCard(title: &'static str, description: &'static str, to: Route) -> Element {
    rsx!(
        Link { to: to, class: "card bg-base-200 hover:bg-base-300",
            div { class: "card-body",
                h2 { class: "card-title", "{title}" }
                p { "{description}" }
            }
        }
    )
}

#[component]
pub fn AdminOverview() -> Element {
    let stats = use_query::<DashboardStatsDto>("/api/dashboard/stats".to_string());

    rsx!(
        Title { "Admin | PitchPass" }
        Page { title: "Platform administration",
            match &*stats.read() {
                Some(Ok(stats)) => rsx!(
                    div { class: "stats bg-base-200",
                        div { class: "stat",
                            div { class: "stat-title", "Players" }
                            div { class: "stat-value", "{stats.players}" }
                        }
                        div { class: "stat",
                            div { class: "stat-title", "Pending verifications" }
                            div { class: "stat-value", "{stats.pending_verifications}" }
                        }
                        div { class: "stat",
                            div { class: "stat-title", "Open inquiries" }
                            div { class: "stat-value", "{stats.open_inquiries}" }
                        }
                    }
                ),
                Some(Err(e)) => rsx!(ErrorState { message: e.to_string() }),
                None => rsx!(Loading {}),
            }
            div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                SectionCard {
                    title: "Audit log",
                    description: "Every state-changing action, newest first",
                    to: Route::AuditLogs {},
                }
                SectionCard {
                    title: "Federation payments",
                    description: "Payments received from member federations",
                    to: Route::FederationPayments {},
                }
                SectionCard {
                    title: "Fee schedules",
                    description: "Current platform fees per action",
                    to: Route::FeeSchedules {},
                }
            }
        }
    )
}

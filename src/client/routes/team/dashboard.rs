use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{ErrorState, Loading, Page},
        store::query::use_query,
    },
    model::dashboard::DashboardStatsDto,
};

#[component]
fn StatCard(label: &'static str, value: String) -> Element {
    rsx!(
        div { class: "stat bg-base-200 rounded-box",
            div { class: "stat-title", "{label}" }
            div { class: "stat-value", "{value}" }
        }
    )
}

#[component]
pub fn Dashboard() -> Element {
    let stats = use_query::<DashboardStatsDto>("/api/dashboard/stats".to_string());

    rsx!(
        Title { "Dashboard | PitchPass" }
        Page { title: "Dashboard",
            match &*stats.read() {
                Some(Ok(stats)) => rsx!(
                    div { class: "grid grid-cols-2 lg:grid-cols-4 gap-4",
                        StatCard { label: "Players", value: stats.players.to_string() }
                        StatCard { label: "Videos", value: stats.videos.to_string() }
                        StatCard { label: "Awaiting analysis", value: stats.unprocessed_videos.to_string() }
                        StatCard { label: "Draft documents", value: stats.draft_documents.to_string() }
                        StatCard { label: "Pending verifications", value: stats.pending_verifications.to_string() }
                        StatCard { label: "Open inquiries", value: stats.open_inquiries.to_string() }
                        StatCard { label: "Token balance", value: stats.token_balance.to_string() }
                    }
                ),
                Some(Err(e)) => rsx!(ErrorState { message: e.to_string() }),
                None => rsx!(Loading {}),
            }
        }
    )
}

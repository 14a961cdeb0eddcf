use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        api,
        components::{ErrorState, Loading, Page, StatusBadge},
        router::Route,
        store::{
            query::{invalidate, use_query},
            toast::use_toaster,
        },
        util::{
            format::datetime,
            spend::{cached_balance, precheck, refresh_balance, report_failure},
        },
    },
    model::{
        player::PlayerDto,
        scouting::{AdvanceInquiryDto, CreateInquiryDto, ScoutingInquiryDto},
        status::Workflow,
        token::{TokenAction, TokenBalanceDto},
    },
};

const INQUIRIES: &str = "/api/scouting/inquiries";

#[component]
fn OpenInquiryForm() -> Element {
    let players = use_query::<Vec<PlayerDto>>("/api/players".to_string());
    let balance = use_query::<TokenBalanceDto>("/api/tokens/balance".to_string());
    let mut toaster = use_toaster();

    let mut player_id = use_signal(String::new);
    let mut buying_club = use_signal(String::new);
    let mut selling_club = use_signal(String::new);

    let open_label = format!("Open inquiry ({} tokens)", TokenAction::InquiryCreate.cost());

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let Ok(player_id) = player_id().parse::<i32>() else {
            toaster.error("Select a player");
            return;
        };
        if buying_club().trim().is_empty() || selling_club().trim().is_empty() {
            toaster.error("Both clubs are required");
            return;
        }
        if !precheck(cached_balance(&balance), TokenAction::InquiryCreate, &mut toaster) {
            return;
        }

        let inquiry = CreateInquiryDto {
            player_id,
            buying_club: buying_club().trim().to_string(),
            selling_club: selling_club().trim().to_string(),
        };
        spawn(async move {
            match api::post::<_, ScoutingInquiryDto>(INQUIRIES, &inquiry).await {
                Ok(created) => {
                    refresh_balance();
                    invalidate([INQUIRIES, "/api/dashboard/stats"]);
                    toaster.success(format!("Inquiry opened for {}", created.player_name));
                    buying_club.set(String::new());
                    selling_club.set(String::new());
                }
                Err(e) => report_failure(&e, "Opening inquiry", &mut toaster),
            }
        });
    };

    rsx!(
        form { class: "grid grid-cols-1 md:grid-cols-4 gap-2", onsubmit: onsubmit,
            select {
                class: "select",
                value: "{player_id}",
                onchange: move |e| {
                    let selected = e.value();
                    if let Some(Ok(players)) = &*players.read() {
                        if let Some(player) = players.iter().find(|p| p.id.to_string() == selected) {
                            selling_club.set(player.current_club.clone());
                        }
                    }
                    player_id.set(selected);
                },
                option { value: "", "Select player" }
                if let Some(Ok(players)) = &*players.read() {
                    {players.iter().map(|player| rsx!(
                        option { key: "{player.id}", value: "{player.id}", "{player.full_name}" }
                    ))}
                }
            }
            input { class: "input", placeholder: "Buying club", value: "{buying_club}", oninput: move |e| buying_club.set(e.value()) }
            input { class: "input", placeholder: "Selling club", value: "{selling_club}", oninput: move |e| selling_club.set(e.value()) }
            button { class: "btn btn-primary", r#type: "submit", "{open_label}" }
        }
    )
}

#[component]
pub fn Inquiries() -> Element {
    let inquiries = use_query::<Vec<ScoutingInquiryDto>>(INQUIRIES.to_string());
    let mut toaster = use_toaster();

    rsx!(
        Title { "Inquiries | PitchPass" }
        Page { title: "Transfer inquiries",
            div { class: "card bg-base-200",
                div { class: "card-body",
                    h2 { class: "card-title", "Open an inquiry" }
                    OpenInquiryForm {}
                }
            }
            match &*inquiries.read() {
                Some(Ok(inquiries)) => rsx!(
                    div { class: "overflow-x-auto",
                        table { class: "table table-md",
                            thead {
                                tr {
                                    th { "Player" }
                                    th { "Buying" }
                                    th { "Selling" }
                                    th { "Status" }
                                    th { "Updated" }
                                    th {}
                                }
                            }
                            tbody {
                                {inquiries.iter().map(|inquiry| {
                                    let id = inquiry.id;
                                    let status = inquiry.status.to_string();
                                    let updated = datetime(&inquiry.updated_at);
                                    rsx!(
                                        tr { key: "{id}",
                                            td { "{inquiry.player_name}" }
                                            td { "{inquiry.buying_club}" }
                                            td { "{inquiry.selling_club}" }
                                            td { StatusBadge { status: status } }
                                            td { "{updated}" }
                                            td { class: "flex gap-1",
                                                Link { to: Route::InquiryThread { id }, class: "btn btn-xs", "Thread" }
                                                {inquiry.status.next_states().iter().copied().map(|next| {
                                                    let label = format!("Move to {}", next.as_str().replace('_', " "));
                                                    rsx!(
                                                        button {
                                                            key: "{next}",
                                                            class: "btn btn-xs btn-outline",
                                                            onclick: move |_| {
                                                                spawn(async move {
                                                                    let path = format!("{}/{}/advance", INQUIRIES, id);
                                                                    let advance = AdvanceInquiryDto { status: next };
                                                                    match api::post::<_, ScoutingInquiryDto>(&path, &advance).await {
                                                                        Ok(_) => invalidate([INQUIRIES, "/api/dashboard/stats"]),
                                                                        Err(e) => toaster.error(format!("Updating inquiry failed: {}", e.message)),
                                                                    }
                                                                });
                                                            },
                                                            "{label}"
                                                        }
                                                    )
                                                })}
                                            }
                                        }
                                    )
                                })}
                            }
                        }
                    }
                ),
                Some(Err(e)) => rsx!(ErrorState { message: e.to_string() }),
                None => rsx!(Loading {}),
            }
        }
    )
}

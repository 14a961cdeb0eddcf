use chrono::NaiveDate;
use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        api,
        components::{ErrorState, Loading, Page, StatusBadge},
        store::{
            query::{invalidate, use_query},
            toast::use_toaster,
        },
        util::{
            format::{datetime, optional_datetime},
            spend::{cached_balance, precheck, refresh_balance, report_failure},
        },
    },
    model::{
        compliance::{ComplianceDocumentDto, GenerateDocumentDto},
        player::PlayerDto,
        status::DocumentStatus,
        token::{TokenAction, TokenBalanceDto},
    },
};

#[component]
fn GenerateForm() -> Element {
    let players = use_query::<Vec<PlayerDto>>("/api/players".to_string());
    let balance = use_query::<TokenBalanceDto>("/api/tokens/balance".to_string());
    let mut toaster = use_toaster();

    let mut player_id = use_signal(String::new);
    let mut period_start = use_signal(String::new);
    let mut period_end = use_signal(String::new);

    let generate_label = format!(
        "Generate ({} tokens)",
        TokenAction::ComplianceReport.cost()
    );

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let Ok(player_id) = player_id().parse::<i32>() else {
            toaster.error("Select a player");
            return;
        };
        let (Ok(period_start), Ok(period_end)) = (
            NaiveDate::parse_from_str(&period_start(), "%Y-%m-%d"),
            NaiveDate::parse_from_str(&period_end(), "%Y-%m-%d"),
        ) else {
            toaster.error("Both period dates are required");
            return;
        };
        if period_end < period_start {
            toaster.error("Period end must not precede its start");
            return;
        }
        if !precheck(
            cached_balance(&balance),
            TokenAction::ComplianceReport,
            &mut toaster,
        ) {
            return;
        }

        let request = GenerateDocumentDto {
            player_id,
            period_start,
            period_end,
        };
        spawn(async move {
            match api::post::<_, ComplianceDocumentDto>("/api/compliance/documents", &request)
                .await
            {
                Ok(document) => {
                    refresh_balance();
                    invalidate(["/api/compliance/documents", "/api/dashboard/stats"]);
                    toaster.success(format!("Draft created for {}", document.player_name));
                }
                Err(e) => report_failure(&e, "Generating report", &mut toaster),
            }
        });
    };

    rsx!(
        form { class: "grid grid-cols-1 md:grid-cols-4 gap-2", onsubmit: onsubmit,
            select { class: "select", value: "{player_id}", onchange: move |e| player_id.set(e.value()),
                option { value: "", "Select player" }
                if let Some(Ok(players)) = &*players.read() {
                    {players.iter().map(|player| rsx!(
                        option { key: "{player.id}", value: "{player.id}", "{player.full_name}" }
                    ))}
                }
            }
            input { class: "input", r#type: "date", value: "{period_start}", oninput: move |e| period_start.set(e.value()) }
            input { class: "input", r#type: "date", value: "{period_end}", oninput: move |e| period_end.set(e.value()) }
            button { class: "btn btn-primary", r#type: "submit", "{generate_label}" }
        }
    )
}

#[component]
pub fn Compliance() -> Element {
    let documents = use_query::<Vec<ComplianceDocumentDto>>("/api/compliance/documents".to_string());
    let mut toaster = use_toaster();

    rsx!(
        Title { "Compliance | PitchPass" }
        Page { title: "Compliance",
            div { class: "card bg-base-200",
                div { class: "card-body",
                    h2 { class: "card-title", "Generate eligibility report" }
                    GenerateForm {}
                }
            }
            match &*documents.read() {
                Some(Ok(documents)) => rsx!(
                    div { class: "overflow-x-auto",
                        table { class: "table table-md",
                            thead {
                                tr {
                                    th { "Player" }
                                    th { "Period" }
                                    th { "Overall" }
                                    th { "Status" }
                                    th { "Created" }
                                    th { "Submitted" }
                                    th {}
                                }
                            }
                            tbody {
                                {documents.iter().map(|document| {
                                    let id = document.id;
                                    let is_draft = document.status == DocumentStatus::Draft;
                                    let status = document.status.to_string();
                                    let created = datetime(&document.created_at);
                                    let overall = document.snapshot.overall();
                                    let submitted = optional_datetime(&document.submitted_at);
                                    rsx!(
                                        tr { key: "{id}",
                                            td { "{document.player_name}" }
                                            td { "{document.period_start} to {document.period_end}" }
                                            td { "{overall}" }
                                            td { StatusBadge { status: status } }
                                            td { "{created}" }
                                            td { "{submitted}" }
                                            td {
                                                if is_draft {
                                                    button {
                                                        class: "btn btn-xs btn-primary",
                                                        onclick: move |_| {
                                                            spawn(async move {
                                                                let path = format!("/api/compliance/documents/{}/submit", id);
                                                                match api::post_empty::<ComplianceDocumentDto>(&path).await {
                                                                    Ok(_) => {
                                                                        toaster.success("Submitted for embassy verification");
                                                                        invalidate(["/api/compliance/documents", "/api/dashboard/stats"]);
                                                                    }
                                                                    Err(e) => toaster.error(format!("Submitting failed: {}", e.message)),
                                                                }
                                                            });
                                                        },
                                                        "Submit"
                                                    }
                                                }
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

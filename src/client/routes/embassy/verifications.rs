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
        util::format::datetime,
    },
    model::embassy::{available_actions, EmbassyVerificationDto, ReviewDecisionDto},
};

#[component]
pub fn Verifications() -> Element {
    let verifications =
        use_query::<Vec<EmbassyVerificationDto>>("/api/embassy/verifications".to_string());
    let mut toaster = use_toaster();
    let mut notes = use_signal(String::new);

    rsx!(
        Title { "Verifications | PitchPass" }
        Page { title: "Verification queue",
            input {
                class: "input w-full",
                placeholder: "Notes attached to the next decision",
                value: "{notes}",
                oninput: move |e| notes.set(e.value()),
            }
            match &*verifications.read() {
                Some(Ok(verifications)) => rsx!(
                    div { class: "overflow-x-auto",
                        table { class: "table table-md",
                            thead {
                                tr {
                                    th { "Player" }
                                    th { "Code" }
                                    th { "Status" }
                                    th { "Updated" }
                                    th { "Notes" }
                                    th {}
                                }
                            }
                            tbody {
                                {verifications.iter().map(|verification| {
                                    let id = verification.id;
                                    let status = verification.status.to_string();
                                    let updated = datetime(&verification.updated_at);
                                    let row_notes = verification.notes.clone().unwrap_or_default();
                                    rsx!(
                                        tr { key: "{id}",
                                            td { "{verification.player_name}" }
                                            td { code { "{verification.verification_code}" } }
                                            td { StatusBadge { status: status } }
                                            td { "{updated}" }
                                            td { "{row_notes}" }
                                            td { class: "flex gap-1",
                                                {available_actions(verification.status).iter().copied().map(|action| {
                                                    let label = action.label();
                                                    rsx!(
                                                        button {
                                                            key: "{label}",
                                                            class: "btn btn-xs btn-outline",
                                                            onclick: move |_| {
                                                                let text = notes().trim().to_string();
                                                                let decision = ReviewDecisionDto {
                                                                    notes: (!text.is_empty()).then_some(text),
                                                                };
                                                                spawn(async move {
                                                                    let path = format!(
                                                                        "/api/embassy/verifications/{}/{}",
                                                                        id,
                                                                        action.endpoint()
                                                                    );
                                                                    match api::post::<_, EmbassyVerificationDto>(&path, &decision).await {
                                                                        Ok(updated) => {
                                                                            toaster.success(format!("{} is now {}", updated.player_name, updated.status));
                                                                            notes.set(String::new());
                                                                            invalidate(["/api/embassy/verifications", "/api/dashboard/stats"]);
                                                                        }
                                                                        Err(e) => toaster.error(format!("{} failed: {}", action.label(), e.message)),
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

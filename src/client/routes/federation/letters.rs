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
        util::format::{datetime, optional_datetime},
    },
    model::{federation::FederationLetterDto, status::LetterStatus},
};

const LETTERS: &str = "/api/federation/letters";

#[component]
pub fn Letters() -> Element {
    let letters = use_query::<Vec<FederationLetterDto>>(LETTERS.to_string());
    let mut toaster = use_toaster();

    let decide = move |id: i32, decision: &'static str| {
        spawn(async move {
            let path = format!("{}/{}/{}", LETTERS, id, decision);
            match api::post_empty::<FederationLetterDto>(&path).await {
                Ok(letter) => {
                    toaster.success(format!("Letter for {} {}", letter.player_name, letter.status));
                    invalidate([LETTERS]);
                }
                Err(e) => toaster.error(format!("Updating letter failed: {}", e.message)),
            }
        });
    };

    rsx!(
        Title { "Letters | PitchPass" }
        Page { title: "Federation letters",
            match &*letters.read() {
                Some(Ok(letters)) => rsx!(
                    div { class: "overflow-x-auto",
                        table { class: "table table-md",
                            thead {
                                tr {
                                    th { "Player" }
                                    th { "Federation" }
                                    th { "Purpose" }
                                    th { "Status" }
                                    th { "Requested" }
                                    th { "Decided" }
                                    th {}
                                }
                            }
                            tbody {
                                {letters.iter().map(|letter| {
                                    let id = letter.id;
                                    let pending = letter.status == LetterStatus::Requested;
                                    let status = letter.status.to_string();
                                    let requested = datetime(&letter.created_at);
                                    let handled = optional_datetime(&letter.handled_at);
                                    rsx!(
                                        tr { key: "{id}",
                                            td { "{letter.player_name}" }
                                            td { "{letter.federation}" }
                                            td { "{letter.purpose}" }
                                            td { StatusBadge { status: status } }
                                            td { "{requested}" }
                                            td { "{handled}" }
                                            td { class: "flex gap-1",
                                                if pending {
                                                    button { class: "btn btn-xs btn-success", onclick: move |_| decide(id, "issue"), "Issue" }
                                                    button { class: "btn btn-xs btn-error", onclick: move |_| decide(id, "decline"), "Decline" }
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

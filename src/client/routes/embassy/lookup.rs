use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        api::{self, ApiError},
        components::{Page, StatusBadge},
        util::format::datetime,
    },
    model::embassy::EmbassyVerificationDto,
};

#[component]
pub fn EmbassyLookup() -> Element {
    let mut code = use_signal(String::new);
    let mut result = use_signal(|| None::<Result<EmbassyVerificationDto, ApiError>>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let code = code().trim().to_ascii_uppercase();
        if code.is_empty() {
            return;
        }
        spawn(async move {
            let path = format!("/api/embassy/verify/{}", code);
            result.set(Some(api::get::<EmbassyVerificationDto>(&path).await));
        });
    };

    rsx!(
        Title { "Verification lookup | PitchPass" }
        Page { title: "Verification lookup",
            form { class: "flex gap-2", onsubmit: onsubmit,
                input {
                    class: "input font-mono",
                    placeholder: "PP00000000",
                    value: "{code}",
                    oninput: move |e| code.set(e.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", "Look up" }
            }
            match &*result.read() {
                Some(Ok(verification)) => {
                    let status = verification.status.to_string();
                    let updated = datetime(&verification.updated_at);
                    let notes = verification.notes.clone().unwrap_or_default();
                    rsx!(
                        div { class: "card bg-base-200",
                            div { class: "card-body",
                                h2 { class: "card-title", "{verification.player_name}" }
                                p { "Code " code { "{verification.verification_code}" } }
                                p { "Document #{verification.document_id}" }
                                StatusBadge { status: status }
                                p { class: "text-sm opacity-70", "Last updated {updated}" }
                                if !notes.is_empty() {
                                    p { "{notes}" }
                                }
                            }
                        }
                    )
                }
                Some(Err(e)) if e.status == 404 => rsx!(
                    div { class: "alert alert-warning", "No verification matches that code" }
                ),
                Some(Err(e)) => rsx!(div { class: "alert alert-error", "{e}" }),
                None => rsx!(),
            }
        }
    )
}

use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx!(
        Title { "Not Found | PitchPass" }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                p { class: "text-2xl", "Page not found" }
                p { "This page does not exist or is not available for the selected role." }
                Link { to: Route::Home {}, class: "btn btn-primary", "Back to start" }
            }
        }
    )
}

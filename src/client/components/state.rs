use dioxus::prelude::*;

#[component]
pub fn Loading() -> Element {
    rsx!(
        div { class: "flex flex-col gap-2",
            div { class: "skeleton h-6 w-full" }
            div { class: "skeleton h-6 w-full" }
            div { class: "skeleton h-6 w-2/3" }
        }
    )
}

/// Inline error shown in place of data that failed to load
#[component]
pub fn ErrorState(message: String) -> Element {
    rsx!(
        div { role: "alert", class: "alert alert-error alert-soft",
            p { "{message}" }
        }
    )
}

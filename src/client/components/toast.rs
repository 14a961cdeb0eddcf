use dioxus::prelude::*;

use crate::client::store::toast::use_toaster;

#[component]
pub fn ToastStack() -> Element {
    let mut toaster = use_toaster();
    let toasts = toaster.toasts.read().clone();

    rsx!(
        div { class: "toast toast-end z-50",
            {toasts.into_iter().map(|toast| {
                let id = toast.id;
                rsx!(
                    div {
                        key: "{id}",
                        class: toast.kind.class(),
                        span { "{toast.message}" }
                        button {
                            class: "btn btn-ghost btn-xs",
                            onclick: move |_| toaster.dismiss(id),
                            "✕"
                        }
                    }
                )
            })}
        }
    )
}

use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::{
    client::{
        api,
        components::Page,
        router::Route,
        store::{role::select_role, toast::use_toaster, user::UserState},
    },
    model::{
        role::Role,
        user::{LoginDto, UserDto},
    },
};

/// Role picker for demo mode; only changes which pages this browser shows
#[component]
fn RoleSelect() -> Element {
    let role = use_context::<Signal<Role>>();
    let navigator = use_navigator();

    rsx!(
        div { class: "card shadow-sm w-full max-w-96",
            div { class: "card-body",
                h2 { class: "card-title", "Select a role" }
                p { class: "text-sm opacity-70", "Demo mode, no authentication required to browse." }
                div { class: "flex flex-wrap gap-2",
                    {Role::ALL.into_iter().map(|option| {
                        let class = if role() == option { "btn btn-primary btn-sm" } else { "btn btn-outline btn-sm" };
                        let label = option.label();
                        rsx!(
                            button {
                                key: "{option}",
                                class: class,
                                onclick: move |_| {
                                    select_role(role, option);
                                    if let Ok(route) = option.route_table().home().parse::<Route>() {
                                        navigator.push(route);
                                    }
                                },
                                "{label}"
                            }
                        )
                    })}
                }
            }
        }
    )
}

#[component]
fn LoginForm() -> Element {
    let mut user_store = use_context::<Store<UserState>>();
    let role = use_context::<Signal<Role>>();
    let mut toaster = use_toaster();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut pending = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        pending.set(true);

        spawn(async move {
            let login = LoginDto {
                username: username(),
                password: password(),
            };

            match api::post::<_, UserDto>("/api/auth/login", &login).await {
                Ok(user) => {
                    let user_role = user.role;
                    user_store.write().user = Some(user);
                    select_role(role, user_role);
                    if let Ok(route) = user_role.route_table().home().parse::<Route>() {
                        navigator.push(route);
                    }
                }
                Err(e) if e.is_unauthorized() => toaster.error("Invalid credentials"),
                Err(e) => toaster.error(format!("Sign in failed: {}", e.message)),
            }

            pending.set(false);
        });
    };

    rsx!(
        form { class: "card shadow-sm w-full max-w-96", onsubmit: onsubmit,
            div { class: "card-body flex flex-col gap-2",
                h2 { class: "card-title", "Sign in" }
                input {
                    class: "input w-full",
                    placeholder: "Username",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
                input {
                    class: "input w-full",
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", disabled: pending(), "Sign in" }
                p { class: "text-xs opacity-70",
                    "Demo accounts use the role name as username, e.g. team, scout or embassy."
                }
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    let user_store = use_context::<Store<UserState>>();

    rsx!(
        Title { "PitchPass" }
        Meta {
            name: "description",
            content: "Compliance and visa-eligibility tracking for football clubs, embassies, scouts and federations."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                p { class: "text-2xl", "PitchPass" }
                if let Some(user) = user_store.read().user.as_ref() {
                    p { {format!("Signed in as {} ({})", user.display_name, user.role.label())} }
                } else if user_store.read().fetched {
                    LoginForm {}
                }
                RoleSelect {}
            }
        }
    )
}

use std::str::FromStr;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api,
        components::{BalanceBadge, ToastStack},
        router::Route,
        store::user::UserState,
    },
    model::role::Role,
};

fn nav_label(path: &str) -> &'static str {
    match path {
        "/dashboard" => "Dashboard",
        "/players" => "Players",
        "/videos" => "Videos",
        "/compliance" => "Compliance",
        "/tokens" => "Tokens",
        "/admin" => "Overview",
        "/admin/audit" => "Audit Log",
        "/admin/payments" => "Payments",
        "/admin/fees" => "Fees",
        "/embassy" => "Verify Code",
        "/embassy/verifications" => "Verifications",
        "/scouting" => "Scouting",
        "/scouting/inquiries" => "Inquiries",
        "/federation" => "Federation",
        "/federation/letters" => "Letters",
        "/federation/map" => "Nationality Map",
        _ => "",
    }
}

#[component]
pub fn Navbar() -> Element {
    let mut user_store = use_context::<Store<UserState>>();
    let role = use_context::<Signal<Role>>();
    let navigator = use_navigator();

    let table = role().route_table();
    let role_label = role().label();
    let links: Vec<(Route, &'static str)> = table
        .paths()
        .iter()
        .filter_map(|path| Route::from_str(path).ok().map(|route| (route, nav_label(path))))
        .collect();

    let user = user_store.read().user.clone();
    let shows_balance = user.is_some() && table.allows("/tokens");

    let logout = move |_| {
        spawn(async move {
            if let Err(e) = api::get::<()>("/api/logout").await {
                tracing::error!("Failed to sign out: {}", e);
            }
            user_store.write().user = None;
            navigator.push(Route::Home {});
        });
    };

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-40",
            div {
                class: "navbar-start",
                Link { to: Route::Home {}, class: "btn btn-ghost flex items-center gap-2",
                    p { class: "text-xl", "PitchPass" }
                    p { class: "text-xs", "{role_label}" }
                }
            }
            div {
                class: "navbar-center hidden lg:flex",
                ul { class: "menu menu-horizontal px-1",
                    {links.into_iter().map(|(route, label)| rsx!(
                        li {
                            Link { to: route, active_class: "menu-active", "{label}" }
                        }
                    ))}
                }
            }
            div {
                class: "navbar-end flex gap-2",
                if shows_balance {
                    BalanceBadge {}
                }
                if let Some(user) = user {
                    span { class: "text-sm", "{user.display_name}" }
                    button { class: "btn btn-outline btn-sm", onclick: logout, "Logout" }
                }
            }
        }

        Outlet::<Route> {}

        ToastStack {}
    }
}

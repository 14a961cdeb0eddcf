use dioxus::prelude::*;

use crate::{
    client::{router::Route, routes::NotFound},
    model::role::Role,
};

/// Renders the page only when its path belongs to the selected role's route table
#[component]
pub fn RoleGate() -> Element {
    let role = use_context::<Signal<Role>>();
    let route = use_route::<Route>();

    if role().route_table().allows(&route.to_string()) {
        rsx!(Outlet::<Route> {})
    } else {
        rsx!(NotFound { segments: Vec::new() })
    }
}

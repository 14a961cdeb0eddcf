use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api,
        router::Route,
        store::{query::QueryCache, role::load_role, toast::Toaster, user::UserState},
    },
    model::{role::Role, user::UserDto},
};

#[component]
pub fn App() -> Element {
    let mut user_store = use_store(UserState::default);
    let mut role = use_signal(|| Role::Team);

    use_context_provider(|| user_store);
    use_context_provider(|| role);
    use_context_provider(|| Signal::new(QueryCache::default()));
    use_context_provider(Toaster::new);

    // Restore the persisted role selection and the signed-in user on load
    use_future(move || async move {
        role.set(load_role().await);

        match api::get::<UserDto>("/api/auth/user").await {
            Ok(user) => user_store.write().user = Some(user),
            Err(e) if e.is_unauthorized() => (),
            Err(e) => tracing::error!("Failed to fetch signed-in user: {}", e),
        }

        user_store.write().fetched = true;
    });

    rsx! {
        document::Link { rel: "stylesheet", href: "/assets/tailwind.css" }
        Router::<Route> {}
    }
}

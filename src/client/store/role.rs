//! Persisted role selection.
//!
//! The selection only picks which route table the browser shows. The server authorizes every
//! request against the signed-in user's own role.

use dioxus::prelude::*;

use crate::model::role::Role;

pub const ROLE_STORAGE_KEY: &str = "pitchpass:role";

/// Reads the stored selection, falling through to [`Role::Team`] when nothing usable is stored
pub async fn load_role() -> Role {
    let script = format!("return localStorage.getItem({:?});", ROLE_STORAGE_KEY);

    let stored = document::eval(&script).join::<Option<String>>().await;

    Role::from_selection(stored.ok().flatten().as_deref())
}

pub fn persist_role(role: Role) {
    let script = format!(
        "localStorage.setItem({:?}, {:?});",
        ROLE_STORAGE_KEY,
        role.as_str()
    );

    let _ = document::eval(&script);
}

/// Selects `role` for this browser and remembers it across reloads
pub fn select_role(mut selection: Signal<Role>, role: Role) {
    selection.set(role);
    persist_role(role);
}

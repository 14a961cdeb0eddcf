//! Cross-page client state: the signed-in user, the persisted role selection, the shared query
//! cache and transient toasts.

pub mod query;
pub mod role;
pub mod toast;
pub mod user;

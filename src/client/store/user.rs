use dioxus::prelude::*;

use crate::model::user::UserDto;

#[derive(Store, Default)]
pub struct UserState {
    pub user: Option<UserDto>,
    /// Set once the initial `/api/auth/user` request has finished, signed in or not
    pub fetched: bool,
}

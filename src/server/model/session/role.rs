use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{
    model::role::Role,
    server::error::{auth::AuthError, Error},
};

pub const SESSION_USER_ROLE_KEY: &str = "pitchpass:user:role";

/// Role of the signed-in user, copied from the database at login
///
/// Server-side authorization reads this value and never the role a browser picked locally.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserRole(pub String);

impl SessionUserRole {
    pub async fn insert(session: &Session, role: Role) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ROLE_KEY, SessionUserRole(role.as_str().to_string()))
            .await?;

        Ok(())
    }

    pub async fn get(session: &Session) -> Result<Option<Role>, Error> {
        session
            .get::<SessionUserRole>(SESSION_USER_ROLE_KEY)
            .await?
            .map(|SessionUserRole(role)| {
                Role::parse(&role).ok_or_else(|| Error::AuthError(AuthError::UnknownRole(role)))
            })
            .transpose()
    }
}

use tower_sessions::Session;

use crate::{
    model::role::Role,
    server::{
        error::{auth::AuthError, Error},
        model::session::{role::SessionUserRole, user::SessionUserId},
    },
};

/// Any signed-in user
pub const SIGNED_IN: &[Role] = &Role::ALL;
pub const ADMIN: &[Role] = &[Role::Admin];
pub const TEAM: &[Role] = &[Role::Team];
pub const EMBASSY: &[Role] = &[Role::Embassy];
pub const FEDERATION: &[Role] = &[Role::FederationAdmin];
pub const SCOUTING: &[Role] = &[Role::Scout, Role::Agent];
/// Roles that maintain player records
pub const PLAYER_EDITORS: &[Role] = &[Role::Team, Role::Admin];
/// Roles that may read player records; scouts and agents pay per profile view
pub const PLAYER_READERS: &[Role] = &[Role::Team, Role::Admin, Role::Scout, Role::Agent];
/// Letters are requested by teams and decided by federation admins
pub const LETTER_READERS: &[Role] = &[Role::Team, Role::FederationAdmin];

/// Signed-in user as recorded in the session at login
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionActor {
    pub user_id: i32,
    pub role: Role,
}

/// Resolves the session user and checks their role against `allowed`
///
/// # Returns
/// - `Ok(SessionActor)`: Signed in with an allowed role
/// - `Err(AuthError::UserNotInSession)`: No user, or no role, in session
/// - `Err(AuthError::Forbidden)`: Signed in with a role outside `allowed`
pub async fn require_role(
    session: &Session,
    allowed: &'static [Role],
) -> Result<SessionActor, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(AuthError::UserNotInSession.into());
    };
    let Some(role) = SessionUserRole::get(session).await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    if !allowed.contains(&role) {
        return Err(AuthError::Forbidden { role, allowed }.into());
    }

    Ok(SessionActor { user_id, role })
}

#[cfg(test)]
mod tests {
    use pitchpass_test_utils::prelude::*;

    use crate::{
        model::role::Role,
        server::{
            controller::util::role::{require_role, SessionActor, EMBASSY, SCOUTING},
            error::{auth::AuthError, Error},
            model::session::{role::SessionUserRole, user::SessionUserId},
        },
    };

    /// Expect an allowed role to resolve to the session actor
    #[tokio::test]
    async fn allows_listed_role() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        SessionUserId::insert(&test.session, 7).await.unwrap();
        SessionUserRole::insert(&test.session, Role::Agent).await.unwrap();

        let actor = require_role(&test.session, SCOUTING).await.unwrap();

        assert_eq!(
            actor,
            SessionActor {
                user_id: 7,
                role: Role::Agent
            }
        );

        Ok(())
    }

    /// Expect other roles to be forbidden
    #[tokio::test]
    async fn forbids_unlisted_role() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        SessionUserId::insert(&test.session, 7).await.unwrap();
        SessionUserRole::insert(&test.session, Role::Team).await.unwrap();

        let result = require_role(&test.session, EMBASSY).await;

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::Forbidden {
                role: Role::Team,
                ..
            }))
        ));

        Ok(())
    }

    /// Expect an empty session to be reported as signed out
    #[tokio::test]
    async fn requires_session_user() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = require_role(&test.session, EMBASSY).await;

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::UserNotInSession))
        ));

        Ok(())
    }
}

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        service::user::user_dto,
        util::password::verify_password,
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks a username and password pair
    ///
    /// Unknown usernames and wrong passwords produce the same error.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserDto, Error> {
        let username = username.trim();

        let Some(user) = UserRepository::new(self.db)
            .find_by_username(username)
            .await?
        else {
            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        };

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        }

        tracing::debug!(user_id = %user.id, "User logged in");

        user_dto(user)
    }
}

#[cfg(test)]
mod tests {
    use pitchpass_test_utils::prelude::*;

    use crate::server::{
        error::{auth::AuthError, Error},
        service::auth::AuthService,
    };

    /// Expect the matching password to log the user in
    #[tokio::test]
    async fn logs_in_with_correct_password() -> Result<(), TestError> {
        let mut test = test_setup_with_tables!(entity::prelude::PitchpassUser)?;
        let user = test.user().insert_user("scout", "scout").await?;

        let result = AuthService::new(&test.state.db)
            .login(" scout ", factory::PASSWORD)
            .await;

        assert!(matches!(result, Ok(dto) if dto.id == user.id));

        Ok(())
    }

    /// Expect wrong passwords and unknown users to fail the same way
    #[tokio::test]
    async fn rejects_bad_credentials() -> Result<(), TestError> {
        let mut test = test_setup_with_tables!(entity::prelude::PitchpassUser)?;
        test.user().insert_user("scout", "scout").await?;

        let service = AuthService::new(&test.state.db);

        let wrong_password = service.login("scout", "not-it").await;
        let unknown_user = service.login("ghost", factory::PASSWORD).await;

        assert!(matches!(
            wrong_password,
            Err(Error::AuthError(AuthError::InvalidCredentials(_)))
        ));
        assert!(matches!(
            unknown_user,
            Err(Error::AuthError(AuthError::InvalidCredentials(_)))
        ));

        Ok(())
    }
}

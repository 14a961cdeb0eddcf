use sea_orm::DatabaseConnection;

use crate::{
    model::{role::Role, user::UserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        service::retry::RetryContext,
    },
};

/// Service for reading user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let ctx = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get user ID {}", user_id), || {
            let db = db.clone();

            Box::pin(async move {
                match UserRepository::new(&db).get(user_id).await? {
                    None => Ok(None),
                    Some(user) => Ok(Some(user_dto(user)?)),
                }
            })
        })
        .await
    }
}

pub fn user_dto(user: entity::pitchpass_user::Model) -> Result<UserDto, Error> {
    let role = Role::parse(&user.role).ok_or_else(|| AuthError::UnknownRole(user.role.clone()))?;

    Ok(UserDto {
        id: user.id,
        username: user.username,
        display_name: user.display_name,
        role,
        created_at: user.created_at,
    })
}

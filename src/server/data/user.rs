use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::model::role::Role;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user, `password_hash` must already be hashed
    pub async fn create(
        &self,
        username: &str,
        display_name: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<entity::pitchpass_user::Model, DbErr> {
        let user = entity::pitchpass_user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            display_name: ActiveValue::Set(display_name.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            role: ActiveValue::Set(role.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::pitchpass_user::Model>, DbErr> {
        entity::prelude::PitchpassUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::pitchpass_user::Model>, DbErr> {
        entity::prelude::PitchpassUser::find()
            .filter(entity::pitchpass_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }
}

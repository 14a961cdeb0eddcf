use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::factory, TestSetup};

impl TestSetup {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> UserFixtures<'a> {
    /// Inserts a user who signs in with [`factory::PASSWORD`]
    pub async fn insert_user(
        &self,
        username: &str,
        role: &str,
    ) -> Result<entity::pitchpass_user::Model, TestError> {
        Ok(
            entity::prelude::PitchpassUser::insert(entity::pitchpass_user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                display_name: ActiveValue::Set(username.to_string()),
                password_hash: ActiveValue::Set(factory::password_hash(factory::PASSWORD)),
                role: ActiveValue::Set(role.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn token<'a>(&'a mut self) -> TokenFixtures<'a> {
        TokenFixtures { setup: self }
    }
}

pub struct TokenFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> TokenFixtures<'a> {
    /// Inserts an account holding `balance` purchased tokens and no spending
    pub async fn insert_account(
        &self,
        user_id: i32,
        balance: i64,
    ) -> Result<entity::token_account::Model, TestError> {
        Ok(
            entity::prelude::TokenAccount::insert(entity::token_account::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                balance: ActiveValue::Set(balance),
                lifetime_purchased: ActiveValue::Set(balance),
                lifetime_spent: ActiveValue::Set(0),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn get_account(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::token_account::Model>, TestError> {
        Ok(entity::prelude::TokenAccount::find()
            .filter(entity::token_account::Column::UserId.eq(user_id))
            .one(&self.setup.state.db)
            .await?)
    }
}

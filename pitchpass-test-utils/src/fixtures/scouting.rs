use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn scouting<'a>(&'a mut self) -> ScoutingFixtures<'a> {
        ScoutingFixtures { setup: self }
    }
}

pub struct ScoutingFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> ScoutingFixtures<'a> {
    pub async fn insert_inquiry(
        &self,
        player_id: i32,
        created_by: i32,
        status: &str,
    ) -> Result<entity::scouting_inquiry::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::ScoutingInquiry::insert(entity::scouting_inquiry::ActiveModel {
                player_id: ActiveValue::Set(player_id),
                buying_club: ActiveValue::Set("Buying FC".to_string()),
                selling_club: ActiveValue::Set("Selling FC".to_string()),
                status: ActiveValue::Set(status.to_string()),
                created_by: ActiveValue::Set(created_by),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}

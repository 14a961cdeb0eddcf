use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn video<'a>(&'a mut self) -> VideoFixtures<'a> {
        VideoFixtures { setup: self }
    }
}

pub struct VideoFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> VideoFixtures<'a> {
    /// Inserts an unprocessed manually uploaded video
    pub async fn insert_video(
        &self,
        player_id: i32,
        object_path: &str,
    ) -> Result<entity::video::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Video::insert(entity::video::ActiveModel {
                player_id: ActiveValue::Set(player_id),
                source: ActiveValue::Set("manual".to_string()),
                object_path: ActiveValue::Set(object_path.to_string()),
                match_date: ActiveValue::Set(now.date()),
                opponent: ActiveValue::Set("Rivals FC".to_string()),
                competition: ActiveValue::Set("League".to_string()),
                minutes_played: ActiveValue::Set(90),
                processed: ActiveValue::Set(false),
                processed_at: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}

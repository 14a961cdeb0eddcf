use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn player<'a>(&'a mut self) -> PlayerFixtures<'a> {
        PlayerFixtures { setup: self }
    }
}

pub struct PlayerFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> PlayerFixtures<'a> {
    /// Inserts a mid-table player with stored scores of zero
    pub async fn insert_player(
        &self,
        full_name: &str,
        nationality: &str,
    ) -> Result<entity::player::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Player::insert(entity::player::ActiveModel {
                full_name: ActiveValue::Set(full_name.to_string()),
                date_of_birth: ActiveValue::Set(
                    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default(),
                ),
                nationality: ActiveValue::Set(nationality.to_string()),
                current_club: ActiveValue::Set("Test FC".to_string()),
                current_league: ActiveValue::Set("Test League".to_string()),
                league_band: ActiveValue::Set(3),
                international_caps: ActiveValue::Set(0),
                minutes_played: ActiveValue::Set(900),
                medical_available: ActiveValue::Set(false),
                gps_available: ActiveValue::Set(false),
                score_schengen: ActiveValue::Set(0),
                score_uk_gbe: ActiveValue::Set(0),
                score_us_p1: ActiveValue::Set(0),
                score_canada_work_permit: ActiveValue::Set(0),
                score_uae_residence: ActiveValue::Set(0),
                score_japan_specified_skilled: ActiveValue::Set(0),
                overall_score: ActiveValue::Set(0),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}

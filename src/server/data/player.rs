use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::player::{EligibilityScores, PlayerFormDto};

pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    /// Creates a new instance of [`PlayerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        form: &PlayerFormDto,
        scores: &EligibilityScores,
    ) -> Result<entity::player::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let mut player = entity::player::ActiveModel {
            created_at: ActiveValue::Set(now),
            ..Default::default()
        };
        apply(&mut player, form, scores);
        player.updated_at = ActiveValue::Set(now);

        player.insert(self.db).await
    }

    /// Overwrites a player's form fields and scores
    ///
    /// Returns `None` when the player does not exist.
    pub async fn update(
        &self,
        player_id: i32,
        form: &PlayerFormDto,
        scores: &EligibilityScores,
    ) -> Result<Option<entity::player::Model>, DbErr> {
        let Some(player) = entity::prelude::Player::find_by_id(player_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut player = player.into_active_model();
        apply(&mut player, form, scores);
        player.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(player.update(self.db).await?))
    }

    pub async fn get(&self, player_id: i32) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find_by_id(player_id)
            .one(self.db)
            .await
    }

    pub async fn get_many(&self, player_ids: &[i32]) -> Result<Vec<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::Id.is_in(player_ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .order_by_asc(entity::player::Column::FullName)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Player::find().count(self.db).await
    }

    /// Number of players per nationality string as stored
    pub async fn count_by_nationality(&self) -> Result<Vec<(String, i64)>, DbErr> {
        entity::prelude::Player::find()
            .select_only()
            .column(entity::player::Column::Nationality)
            .column_as(entity::player::Column::Id.count(), "players")
            .group_by(entity::player::Column::Nationality)
            .order_by_asc(entity::player::Column::Nationality)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await
    }
}

fn apply(
    player: &mut entity::player::ActiveModel,
    form: &PlayerFormDto,
    scores: &EligibilityScores,
) {
    player.full_name = ActiveValue::Set(form.full_name.trim().to_string());
    player.date_of_birth = ActiveValue::Set(form.date_of_birth);
    player.nationality = ActiveValue::Set(form.nationality.trim().to_string());
    player.current_club = ActiveValue::Set(form.current_club.trim().to_string());
    player.current_league = ActiveValue::Set(form.current_league.trim().to_string());
    player.league_band = ActiveValue::Set(form.league_band);
    player.international_caps = ActiveValue::Set(form.international_caps);
    player.minutes_played = ActiveValue::Set(form.minutes_played);
    player.medical_available = ActiveValue::Set(form.medical_available);
    player.gps_available = ActiveValue::Set(form.gps_available);
    player.score_schengen = ActiveValue::Set(scores.schengen);
    player.score_uk_gbe = ActiveValue::Set(scores.uk_gbe);
    player.score_us_p1 = ActiveValue::Set(scores.us_p1);
    player.score_canada_work_permit = ActiveValue::Set(scores.canada_work_permit);
    player.score_uae_residence = ActiveValue::Set(scores.uae_residence);
    player.score_japan_specified_skilled = ActiveValue::Set(scores.japan_specified_skilled);
    player.overall_score = ActiveValue::Set(scores.overall());
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::model::player::PlayerFormDto;

    pub fn form(full_name: &str, nationality: &str) -> PlayerFormDto {
        PlayerFormDto {
            full_name: full_name.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2001, 4, 12).unwrap(),
            nationality: nationality.to_string(),
            current_club: "Accra Lions".to_string(),
            current_league: "Ghana Premier League".to_string(),
            league_band: 4,
            international_caps: 3,
            minutes_played: 1800,
            medical_available: true,
            gps_available: false,
        }
    }

    mod update {
        use pitchpass_test_utils::prelude::*;

        use crate::{
            model::player::EligibilityScores,
            server::data::player::{tests::form, PlayerRepository},
        };

        /// Expect updated fields and recomputed overall score to be persisted
        #[tokio::test]
        async fn updates_existing_player() -> Result<(), TestError> {
            let mut test = test_setup_with_tables!(entity::prelude::Player)?;
            let player = test.player().insert_player("Kwame Mensah", "Ghana").await?;

            let mut player_form = form("Kwame Mensah", "Ghana");
            player_form.current_club = "Hearts of Oak".to_string();
            let scores = EligibilityScores {
                schengen: 60,
                ..Default::default()
            };

            let result = PlayerRepository::new(&test.state.db)
                .update(player.id, &player_form, &scores)
                .await?;

            let updated = result.expect("player should exist");
            assert_eq!(updated.current_club, "Hearts of Oak");
            assert_eq!(updated.score_schengen, 60);
            assert_eq!(updated.overall_score, 10);

            Ok(())
        }

        /// Expect None when the player does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_player() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Player)?;

            let player_form = form("Kwame Mensah", "Ghana");
            let result = PlayerRepository::new(&test.state.db)
                .update(1, &player_form, &EligibilityScores::default())
                .await?;

            assert!(result.is_none());

            Ok(())
        }
    }

    mod count_by_nationality {
        use pitchpass_test_utils::prelude::*;

        use crate::server::data::player::PlayerRepository;

        /// Expect one row per nationality with its player count
        #[tokio::test]
        async fn groups_players_by_nationality() -> Result<(), TestError> {
            let mut test = test_setup_with_tables!(entity::prelude::Player)?;
            test.player().insert_player("A", "Ghana").await?;
            test.player().insert_player("B", "Ghana").await?;
            test.player().insert_player("C", "Brazil").await?;

            let counts = PlayerRepository::new(&test.state.db)
                .count_by_nationality()
                .await?;

            assert_eq!(
                counts,
                vec![("Brazil".to_string(), 1), ("Ghana".to_string(), 2)]
            );

            Ok(())
        }
    }
}

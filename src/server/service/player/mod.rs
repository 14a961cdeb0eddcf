//! Player records and their visa eligibility scores.

pub mod eligibility;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        player::{EligibilityScores, PlayerDto, PlayerFormDto},
        role::Role,
        token::TokenAction,
    },
    server::{
        data::player::PlayerRepository,
        error::Error,
        service::{audit, retry::RetryContext, token},
    },
};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<PlayerDto>, Error> {
        let ctx = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry("list players", || {
            let db = db.clone();

            Box::pin(async move {
                let players = PlayerRepository::new(&db).list().await?;

                Ok(players.into_iter().map(player_dto).collect())
            })
        })
        .await
    }

    /// Loads a profile on behalf of `viewer_id`
    ///
    /// Scouts and agents pay the profile view cost; other roles read for free.
    pub async fn view(
        &self,
        viewer_id: i32,
        viewer_role: Role,
        player_id: i32,
    ) -> Result<PlayerDto, Error> {
        if !matches!(viewer_role, Role::Scout | Role::Agent) {
            return PlayerRepository::new(self.db)
                .get(player_id)
                .await?
                .map(player_dto)
                .ok_or_else(|| Error::NotFound("Player".to_string()));
        }

        let txn = self.db.begin().await?;

        let player = PlayerRepository::new(&txn)
            .get(player_id)
            .await?
            .ok_or_else(|| Error::NotFound("Player".to_string()))?;

        let reference = format!("player:{}", player_id);
        token::charge(&txn, viewer_id, TokenAction::ProfileView, Some(&reference)).await?;

        txn.commit().await?;

        Ok(player_dto(player))
    }

    pub async fn create(&self, actor_id: i32, form: &PlayerFormDto) -> Result<PlayerDto, Error> {
        form.validate().map_err(Error::Validation)?;
        let scores = eligibility::score(form);

        let txn = self.db.begin().await?;

        let player = PlayerRepository::new(&txn).create(form, &scores).await?;
        audit::record(&txn, actor_id, "player.create", "player", player.id, None).await?;

        txn.commit().await?;

        Ok(player_dto(player))
    }

    /// Rewrites a player's record and recomputes every score
    pub async fn update(
        &self,
        actor_id: i32,
        player_id: i32,
        form: &PlayerFormDto,
    ) -> Result<PlayerDto, Error> {
        form.validate().map_err(Error::Validation)?;
        let scores = eligibility::score(form);

        let txn = self.db.begin().await?;

        let player = PlayerRepository::new(&txn)
            .update(player_id, form, &scores)
            .await?
            .ok_or_else(|| Error::NotFound("Player".to_string()))?;
        audit::record(&txn, actor_id, "player.update", "player", player.id, None).await?;

        txn.commit().await?;

        Ok(player_dto(player))
    }
}

pub fn scores(player: &entity::player::Model) -> EligibilityScores {
    EligibilityScores {
        schengen: player.score_schengen,
        uk_gbe: player.score_uk_gbe,
        us_p1: player.score_us_p1,
        canada_work_permit: player.score_canada_work_permit,
        uae_residence: player.score_uae_residence,
        japan_specified_skilled: player.score_japan_specified_skilled,
    }
}

pub fn player_dto(player: entity::player::Model) -> PlayerDto {
    PlayerDto {
        scores: scores(&player),
        id: player.id,
        full_name: player.full_name,
        date_of_birth: player.date_of_birth,
        nationality: player.nationality,
        current_club: player.current_club,
        current_league: player.current_league,
        league_band: player.league_band,
        international_caps: player.international_caps,
        minutes_played: player.minutes_played,
        medical_available: player.medical_available,
        gps_available: player.gps_available,
        overall_score: player.overall_score,
        updated_at: player.updated_at,
    }
}

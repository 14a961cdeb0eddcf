use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        federation::{FederationLetterDto, NationalityCountDto, RequestLetterDto},
        status::{LetterStatus, Workflow},
    },
    server::{
        data::{federation::FederationLetterRepository, player::PlayerRepository},
        error::Error,
        service::{
            audit,
            retry::RetryContext,
            workflow::{ensure_applied, ensure_transition, parse_status},
        },
    },
};

pub struct FederationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FederationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<FederationLetterDto>, Error> {
        let ctx = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry("list federation letters", || {
            let db = db.clone();

            Box::pin(async move {
                let letters = FederationLetterRepository::new(&db).list().await?;

                letters
                    .into_iter()
                    .map(|(letter, player)| {
                        let player_name = player.map(|p| p.full_name).unwrap_or_default();

                        letter_dto(letter, player_name)
                    })
                    .collect()
            })
        })
        .await
    }

    /// Requests a clearance letter for a player
    pub async fn request(
        &self,
        user_id: i32,
        letter: &RequestLetterDto,
    ) -> Result<FederationLetterDto, Error> {
        if letter.federation.trim().is_empty() || letter.purpose.trim().is_empty() {
            return Err(Error::Validation(
                "Federation and purpose are required".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let player = PlayerRepository::new(&txn)
            .get(letter.player_id)
            .await?
            .ok_or_else(|| Error::NotFound("Player".to_string()))?;

        let created = FederationLetterRepository::new(&txn)
            .create(letter, user_id)
            .await?;
        audit::record(
            &txn,
            user_id,
            "federation.request",
            "federation_letter",
            created.id,
            None,
        )
        .await?;

        txn.commit().await?;

        letter_dto(created, player.full_name)
    }

    /// Issues or declines a requested letter
    pub async fn decide(
        &self,
        user_id: i32,
        letter_id: i32,
        to: LetterStatus,
    ) -> Result<FederationLetterDto, Error> {
        let txn = self.db.begin().await?;

        let repository = FederationLetterRepository::new(&txn);
        let letter = repository
            .get(letter_id)
            .await?
            .ok_or_else(|| Error::NotFound("Letter".to_string()))?;

        let from: LetterStatus = parse_status(&letter.status)?;
        ensure_transition("letter", from, to)?;

        let applied = repository.transition(letter_id, from, to, user_id).await?;
        ensure_applied(applied, "letter", from, to)?;

        audit::record(
            &txn,
            user_id,
            &format!("federation.{}", to.as_str()),
            "federation_letter",
            letter_id,
            None,
        )
        .await?;

        let letter = repository
            .get(letter_id)
            .await?
            .ok_or_else(|| Error::NotFound("Letter".to_string()))?;
        let player_name = PlayerRepository::new(&txn)
            .get(letter.player_id)
            .await?
            .map(|p| p.full_name)
            .unwrap_or_default();

        txn.commit().await?;

        letter_dto(letter, player_name)
    }

    /// Registered players grouped by nationality
    pub async fn nationality_counts(&self) -> Result<Vec<NationalityCountDto>, Error> {
        let counts = PlayerRepository::new(self.db).count_by_nationality().await?;

        Ok(counts
            .into_iter()
            .map(|(nationality, players)| NationalityCountDto {
                nationality,
                players: u32::try_from(players).unwrap_or(u32::MAX),
            })
            .collect())
    }
}

fn letter_dto(
    letter: entity::federation_letter::Model,
    player_name: String,
) -> Result<FederationLetterDto, Error> {
    Ok(FederationLetterDto {
        id: letter.id,
        player_id: letter.player_id,
        player_name,
        federation: letter.federation,
        purpose: letter.purpose,
        status: parse_status(&letter.status)?,
        created_at: letter.created_at,
        handled_at: letter.handled_at,
    })
}

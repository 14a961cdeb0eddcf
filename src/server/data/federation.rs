use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::{
    federation::RequestLetterDto,
    status::{LetterStatus, Workflow},
};

pub struct FederationLetterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FederationLetterRepository<'a, C> {
    /// Creates a new instance of [`FederationLetterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        letter: &RequestLetterDto,
        requested_by: i32,
    ) -> Result<entity::federation_letter::Model, DbErr> {
        let letter = entity::federation_letter::ActiveModel {
            player_id: ActiveValue::Set(letter.player_id),
            federation: ActiveValue::Set(letter.federation.trim().to_string()),
            purpose: ActiveValue::Set(letter.purpose.trim().to_string()),
            status: ActiveValue::Set(LetterStatus::Requested.as_str().to_string()),
            requested_by: ActiveValue::Set(requested_by),
            handled_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            handled_at: ActiveValue::Set(None),
            ..Default::default()
        };

        letter.insert(self.db).await
    }

    pub async fn get(
        &self,
        letter_id: i32,
    ) -> Result<Option<entity::federation_letter::Model>, DbErr> {
        entity::prelude::FederationLetter::find_by_id(letter_id)
            .one(self.db)
            .await
    }

    /// Newest first, with the related player
    pub async fn list(
        &self,
    ) -> Result<
        Vec<(
            entity::federation_letter::Model,
            Option<entity::player::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::FederationLetter::find()
            .find_also_related(entity::player::Entity)
            .order_by_desc(entity::federation_letter::Column::CreatedAt)
            .order_by_desc(entity::federation_letter::Column::Id)
            .all(self.db)
            .await
    }

    /// Moves a letter from `from` to `to` and records who handled it
    ///
    /// Returns `false` when the letter is not currently in `from`.
    pub async fn transition(
        &self,
        letter_id: i32,
        from: LetterStatus,
        to: LetterStatus,
        handled_by: i32,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::FederationLetter::update_many()
            .col_expr(
                entity::federation_letter::Column::Status,
                Expr::value(to.as_str()),
            )
            .col_expr(
                entity::federation_letter::Column::HandledBy,
                Expr::value(Some(handled_by)),
            )
            .col_expr(
                entity::federation_letter::Column::HandledAt,
                Expr::value(Some(Utc::now().naive_utc())),
            )
            .filter(entity::federation_letter::Column::Id.eq(letter_id))
            .filter(entity::federation_letter::Column::Status.eq(from.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}

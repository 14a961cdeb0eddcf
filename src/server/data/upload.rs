use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter,
};

pub struct UploadSlotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

/// Values needed to issue a new upload destination
pub struct NewUploadSlot<'s> {
    pub token: &'s str,
    pub object_path: &'s str,
    pub user_id: i32,
    pub file_name: &'s str,
    pub content_type: &'s str,
    pub size_bytes: i64,
    pub expires_at: NaiveDateTime,
}

impl<'a, C: ConnectionTrait> UploadSlotRepository<'a, C> {
    /// Creates a new instance of [`UploadSlotRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, slot: NewUploadSlot<'_>) -> Result<entity::upload_slot::Model, DbErr> {
        let slot = entity::upload_slot::ActiveModel {
            token: ActiveValue::Set(slot.token.to_string()),
            object_path: ActiveValue::Set(slot.object_path.to_string()),
            user_id: ActiveValue::Set(slot.user_id),
            file_name: ActiveValue::Set(slot.file_name.to_string()),
            content_type: ActiveValue::Set(slot.content_type.to_string()),
            size_bytes: ActiveValue::Set(slot.size_bytes),
            expires_at: ActiveValue::Set(slot.expires_at),
            uploaded_at: ActiveValue::Set(None),
            consumed: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        slot.insert(self.db).await
    }

    pub async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<entity::upload_slot::Model>, DbErr> {
        entity::prelude::UploadSlot::find()
            .filter(entity::upload_slot::Column::Token.eq(token))
            .one(self.db)
            .await
    }

    pub async fn find_by_object_path(
        &self,
        object_path: &str,
    ) -> Result<Option<entity::upload_slot::Model>, DbErr> {
        entity::prelude::UploadSlot::find()
            .filter(entity::upload_slot::Column::ObjectPath.eq(object_path))
            .one(self.db)
            .await
    }

    /// Claims the slot for a single upload
    ///
    /// Returns `false` when another upload already claimed it.
    pub async fn claim(&self, slot_id: i32, now: NaiveDateTime) -> Result<bool, DbErr> {
        let result = entity::prelude::UploadSlot::update_many()
            .col_expr(entity::upload_slot::Column::UploadedAt, Expr::value(Some(now)))
            .filter(entity::upload_slot::Column::Id.eq(slot_id))
            .filter(entity::upload_slot::Column::UploadedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Undoes [`Self::claim`] after a failed upload
    pub async fn release(&self, slot_id: i32) -> Result<(), DbErr> {
        entity::prelude::UploadSlot::update_many()
            .col_expr(
                entity::upload_slot::Column::UploadedAt,
                Expr::value(Option::<NaiveDateTime>::None),
            )
            .filter(entity::upload_slot::Column::Id.eq(slot_id))
            .filter(entity::upload_slot::Column::Consumed.eq(false))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Marks an uploaded slot as attached to a video
    ///
    /// Returns `false` when the slot was never uploaded to or is already consumed.
    pub async fn consume(&self, slot_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UploadSlot::update_many()
            .col_expr(entity::upload_slot::Column::Consumed, Expr::value(true))
            .filter(entity::upload_slot::Column::Id.eq(slot_id))
            .filter(entity::upload_slot::Column::Consumed.eq(false))
            .filter(entity::upload_slot::Column::UploadedAt.is_not_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Unconsumed slots nobody will turn into a video any more
    ///
    /// A slot is stale when it expired before `expired_before` without being claimed, or when
    /// its upload was claimed before `uploaded_before`. Claimed slots are judged by their claim
    /// time so a `PUT` accepted inside the TTL keeps its slot while it streams.
    pub async fn get_stale(
        &self,
        expired_before: NaiveDateTime,
        uploaded_before: NaiveDateTime,
    ) -> Result<Vec<entity::upload_slot::Model>, DbErr> {
        entity::prelude::UploadSlot::find()
            .filter(stale(expired_before, uploaded_before))
            .all(self.db)
            .await
    }

    /// Deletes the slot only if it is still stale
    ///
    /// Returns `false` when the slot was claimed, consumed or removed since it was listed.
    pub async fn delete_if_stale(
        &self,
        slot_id: i32,
        expired_before: NaiveDateTime,
        uploaded_before: NaiveDateTime,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::UploadSlot::delete_many()
            .filter(entity::upload_slot::Column::Id.eq(slot_id))
            .filter(stale(expired_before, uploaded_before))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}

fn stale(expired_before: NaiveDateTime, uploaded_before: NaiveDateTime) -> Condition {
    Condition::all()
        .add(entity::upload_slot::Column::Consumed.eq(false))
        .add(
            Condition::any()
                .add(
                    Condition::all()
                        .add(entity::upload_slot::Column::UploadedAt.is_null())
                        .add(entity::upload_slot::Column::ExpiresAt.lt(expired_before)),
                )
                .add(entity::upload_slot::Column::UploadedAt.lt(uploaded_before)),
        )
}

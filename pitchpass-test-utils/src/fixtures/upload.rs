use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

/// Declared size of fixture slots
pub const SLOT_SIZE_BYTES: i64 = 1024;

impl TestSetup {
    pub fn upload<'a>(&'a mut self) -> UploadFixtures<'a> {
        UploadFixtures { setup: self }
    }
}

pub struct UploadFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> UploadFixtures<'a> {
    /// Inserts an issued slot that has not received any bytes yet
    ///
    /// The object path is `videos/{token}/clip.mp4`.
    pub async fn insert_slot(
        &self,
        user_id: i32,
        token: &str,
        expires_at: NaiveDateTime,
    ) -> Result<entity::upload_slot::Model, TestError> {
        self.insert(user_id, token, expires_at, None).await
    }

    /// Inserts a slot whose upload already completed
    pub async fn insert_uploaded_slot(
        &self,
        user_id: i32,
        token: &str,
        expires_at: NaiveDateTime,
    ) -> Result<entity::upload_slot::Model, TestError> {
        self.insert(user_id, token, expires_at, Some(Utc::now().naive_utc()))
            .await
    }

    /// Inserts a slot whose upload was claimed at `uploaded_at`
    pub async fn insert_slot_uploaded_at(
        &self,
        user_id: i32,
        token: &str,
        expires_at: NaiveDateTime,
        uploaded_at: NaiveDateTime,
    ) -> Result<entity::upload_slot::Model, TestError> {
        self.insert(user_id, token, expires_at, Some(uploaded_at))
            .await
    }

    async fn insert(
        &self,
        user_id: i32,
        token: &str,
        expires_at: NaiveDateTime,
        uploaded_at: Option<NaiveDateTime>,
    ) -> Result<entity::upload_slot::Model, TestError> {
        Ok(
            entity::prelude::UploadSlot::insert(entity::upload_slot::ActiveModel {
                token: ActiveValue::Set(token.to_string()),
                object_path: ActiveValue::Set(format!("videos/{}/clip.mp4", token)),
                user_id: ActiveValue::Set(user_id),
                file_name: ActiveValue::Set("clip.mp4".to_string()),
                content_type: ActiveValue::Set("video/mp4".to_string()),
                size_bytes: ActiveValue::Set(SLOT_SIZE_BYTES),
                expires_at: ActiveValue::Set(expires_at),
                uploaded_at: ActiveValue::Set(uploaded_at),
                consumed: ActiveValue::Set(false),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::video::{CreateVideoDto, VideoDto, VideoSource},
    server::{
        data::{player::PlayerRepository, upload::UploadSlotRepository, video::VideoRepository},
        error::{upload::UploadError, Error},
        service::{audit, retry::RetryContext},
    },
};

pub struct VideoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VideoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<VideoDto>, Error> {
        let ctx = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry("list videos", || {
            let db = db.clone();

            Box::pin(async move {
                let videos = VideoRepository::new(&db).list().await?;

                videos.into_iter().map(video_dto).collect()
            })
        })
        .await
    }

    /// Creates a video record from a completed upload
    ///
    /// The upload slot is consumed in the same transaction, so each stored file backs at most
    /// one video.
    pub async fn create(&self, user_id: i32, video: &CreateVideoDto) -> Result<VideoDto, Error> {
        if video.opponent.trim().is_empty() || video.competition.trim().is_empty() {
            return Err(Error::Validation(
                "Opponent and competition are required".to_string(),
            ));
        }
        if !(0..=130).contains(&video.minutes_played) {
            return Err(Error::Validation(
                "Minutes played must be between 0 and 130".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let slot = match UploadSlotRepository::new(&txn)
            .find_by_object_path(&video.object_path)
            .await?
        {
            Some(slot) if slot.user_id == user_id => slot,
            _ => return Err(UploadError::SlotNotFound.into()),
        };
        if slot.uploaded_at.is_none() {
            return Err(UploadError::NotUploaded(slot.object_path).into());
        }

        if PlayerRepository::new(&txn)
            .get(video.player_id)
            .await?
            .is_none()
        {
            return Err(Error::NotFound("Player".to_string()));
        }

        if !UploadSlotRepository::new(&txn).consume(slot.id).await? {
            return Err(UploadError::AlreadyConsumed(slot.object_path).into());
        }

        let created = VideoRepository::new(&txn).create(video).await?;
        audit::record(
            &txn,
            user_id,
            "video.create",
            "video",
            created.id,
            Some(format!("player:{}", created.player_id)),
        )
        .await?;

        txn.commit().await?;

        video_dto(created)
    }

    /// Flags a video as analysed, returning `false` when it already was
    pub async fn mark_processed(&self, video_id: i32) -> Result<bool, Error> {
        Ok(VideoRepository::new(self.db)
            .mark_processed(video_id)
            .await?)
    }
}

pub fn video_dto(video: entity::video::Model) -> Result<VideoDto, Error> {
    let source = VideoSource::parse(&video.source)
        .ok_or_else(|| Error::ParseError(format!("unknown video source {:?}", video.source)))?;

    Ok(VideoDto {
        id: video.id,
        player_id: video.player_id,
        source,
        file_url: video.object_path,
        match_date: video.match_date,
        opponent: video.opponent,
        competition: video.competition,
        minutes_played: video.minutes_played,
        processed: video.processed,
        created_at: video.created_at,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::model::video::{CreateVideoDto, VideoSource};

    pub fn video(player_id: i32, object_path: &str) -> CreateVideoDto {
        CreateVideoDto {
            player_id,
            object_path: object_path.to_string(),
            source: VideoSource::Manual,
            match_date: NaiveDate::from_ymd_opt(2025, 3, 8).unwrap(),
            opponent: "Hearts of Oak".to_string(),
            competition: "Ghana Premier League".to_string(),
            minutes_played: 90,
        }
    }

    mod create {
        use chrono::{Duration, Utc};
        use pitchpass_test_utils::prelude::*;

        use crate::server::{
            error::{upload::UploadError, Error},
            service::video::{tests::video, VideoService},
        };

        /// Expect a video to be created once from an uploaded slot
        #[tokio::test]
        async fn consumes_uploaded_slot() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let user = test.user().insert_user("team", "team").await?;
            let player = test.player().insert_player("Kwame Mensah", "Ghana").await?;
            let expires_at = Utc::now().naive_utc() + Duration::minutes(10);
            let slot = test
                .upload()
                .insert_uploaded_slot(user.id, "video-token", expires_at)
                .await?;

            let service = VideoService::new(&test.state.db);
            let created = service
                .create(user.id, &video(player.id, &slot.object_path))
                .await
                .unwrap();

            assert_eq!(created.file_url, slot.object_path);
            assert!(!created.processed);

            let again = service
                .create(user.id, &video(player.id, &slot.object_path))
                .await;
            assert!(matches!(
                again,
                Err(Error::UploadError(UploadError::AlreadyConsumed(_)))
            ));

            Ok(())
        }

        /// Expect a slot that never received a file to be refused
        #[tokio::test]
        async fn refuses_slot_without_file() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let user = test.user().insert_user("team", "team").await?;
            let player = test.player().insert_player("Kwame Mensah", "Ghana").await?;
            let expires_at = Utc::now().naive_utc() + Duration::minutes(10);
            let slot = test
                .upload()
                .insert_slot(user.id, "video-token", expires_at)
                .await?;

            let result = VideoService::new(&test.state.db)
                .create(user.id, &video(player.id, &slot.object_path))
                .await;

            assert!(matches!(
                result,
                Err(Error::UploadError(UploadError::NotUploaded(_)))
            ));

            Ok(())
        }

        /// Expect an unknown player to be reported without consuming the slot
        #[tokio::test]
        async fn refuses_unknown_player() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let user = test.user().insert_user("team", "team").await?;
            let expires_at = Utc::now().naive_utc() + Duration::minutes(10);
            let slot = test
                .upload()
                .insert_uploaded_slot(user.id, "video-token", expires_at)
                .await?;

            let result = VideoService::new(&test.state.db)
                .create(user.id, &video(404, &slot.object_path))
                .await;

            assert!(matches!(result, Err(Error::NotFound(_))));

            Ok(())
        }
    }

    mod mark_processed {
        use pitchpass_test_utils::prelude::*;

        use crate::server::service::video::VideoService;

        /// Expect the first call to flag the video and the second to report no change
        #[tokio::test]
        async fn flags_once() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let player = test.player().insert_player("Kwame Mensah", "Ghana").await?;
            let video = test.video().insert_video(player.id, "videos/a/b.mp4").await?;

            let service = VideoService::new(&test.state.db);

            assert!(service.mark_processed(video.id).await.unwrap());
            assert!(!service.mark_processed(video.id).await.unwrap());

            Ok(())
        }
    }
}

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::video::CreateVideoDto;

pub struct VideoRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VideoRepository<'a, C> {
    /// Creates a new instance of [`VideoRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, video: &CreateVideoDto) -> Result<entity::video::Model, DbErr> {
        let video = entity::video::ActiveModel {
            player_id: ActiveValue::Set(video.player_id),
            source: ActiveValue::Set(video.source.as_str().to_string()),
            object_path: ActiveValue::Set(video.object_path.clone()),
            match_date: ActiveValue::Set(video.match_date),
            opponent: ActiveValue::Set(video.opponent.trim().to_string()),
            competition: ActiveValue::Set(video.competition.trim().to_string()),
            minutes_played: ActiveValue::Set(video.minutes_played),
            processed: ActiveValue::Set(false),
            processed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        video.insert(self.db).await
    }

    pub async fn get(&self, video_id: i32) -> Result<Option<entity::video::Model>, DbErr> {
        entity::prelude::Video::find_by_id(video_id)
            .one(self.db)
            .await
    }

    /// Newest first
    pub async fn list(&self) -> Result<Vec<entity::video::Model>, DbErr> {
        entity::prelude::Video::find()
            .order_by_desc(entity::video::Column::CreatedAt)
            .order_by_desc(entity::video::Column::Id)
            .all(self.db)
            .await
    }

    /// Oldest unprocessed videos first, up to `limit`
    pub async fn get_unprocessed(&self, limit: u64) -> Result<Vec<entity::video::Model>, DbErr> {
        entity::prelude::Video::find()
            .filter(entity::video::Column::Processed.eq(false))
            .order_by_asc(entity::video::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Flags a video as processed
    ///
    /// Returns `false` when the video does not exist or was already processed.
    pub async fn mark_processed(&self, video_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Video::update_many()
            .col_expr(entity::video::Column::Processed, Expr::value(true))
            .col_expr(
                entity::video::Column::ProcessedAt,
                Expr::value(Some(Utc::now().naive_utc())),
            )
            .filter(entity::video::Column::Id.eq(video_id))
            .filter(entity::video::Column::Processed.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Video::find().count(self.db).await
    }

    pub async fn count_unprocessed(&self) -> Result<u64, DbErr> {
        entity::prelude::Video::find()
            .filter(entity::video::Column::Processed.eq(false))
            .count(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod mark_processed {
        use pitchpass_test_utils::prelude::*;

        use crate::server::data::video::VideoRepository;

        /// Expect the first call to flip the flag and the second to report no change
        #[tokio::test]
        async fn marks_video_once() -> Result<(), TestError> {
            let mut test =
                test_setup_with_tables!(entity::prelude::Player, entity::prelude::Video)?;
            let player = test.player().insert_player("Kwame Mensah", "Ghana").await?;
            let video = test.video().insert_video(player.id, "videos/a/clip.mp4").await?;

            let video_repository = VideoRepository::new(&test.state.db);

            assert!(video_repository.mark_processed(video.id).await?);
            assert!(!video_repository.mark_processed(video.id).await?);

            let stored = video_repository.get(video.id).await?.unwrap();
            assert!(stored.processed);
            assert!(stored.processed_at.is_some());

            Ok(())
        }

        /// Expect false for a video that does not exist
        #[tokio::test]
        async fn returns_false_for_nonexistent_video() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Player, entity::prelude::Video)?;

            let result = VideoRepository::new(&test.state.db).mark_processed(1).await?;

            assert!(!result);

            Ok(())
        }
    }

    mod get_unprocessed {
        use pitchpass_test_utils::prelude::*;

        use crate::server::data::video::VideoRepository;

        /// Expect processed videos to be skipped
        #[tokio::test]
        async fn skips_processed_videos() -> Result<(), TestError> {
            let mut test =
                test_setup_with_tables!(entity::prelude::Player, entity::prelude::Video)?;
            let player = test.player().insert_player("Kwame Mensah", "Ghana").await?;
            let first = test.video().insert_video(player.id, "videos/a/one.mp4").await?;
            let second = test.video().insert_video(player.id, "videos/b/two.mp4").await?;

            let video_repository = VideoRepository::new(&test.state.db);
            video_repository.mark_processed(first.id).await?;

            let pending = video_repository.get_unprocessed(10).await?;

            assert_eq!(pending.len(), 1);
            assert_eq!(pending[0].id, second.id);

            Ok(())
        }
    }
}

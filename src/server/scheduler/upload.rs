use crate::server::{error::Error, scheduler::SchedulerState, service::upload::UploadService};

/// Deletes expired upload destinations that never became a video, along with their files
pub async fn purge_stale_uploads(state: SchedulerState) -> Result<usize, Error> {
    let removed = UploadService::new(&state.db, &state.uploads)
        .purge_stale()
        .await?;

    Ok(removed as usize)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use pitchpass_test_utils::prelude::*;

    use crate::server::{
        data::upload::UploadSlotRepository, model::app::AppState, service::upload::UploadService,
    };

    /// Expect expired slots and their files to be removed while live slots stay
    #[tokio::test]
    async fn purges_only_expired_slots() -> Result<(), TestError> {
        let mut test = test_setup_with_tables!(entity::prelude::UploadSlot)?;
        let now = Utc::now().naive_utc();
        let abandoned = test
            .upload()
            .insert_slot_uploaded_at(
                1,
                "abandoned",
                now - Duration::minutes(20),
                now - Duration::minutes(30),
            )
            .await?;
        test.upload()
            .insert_slot(1, "expired", now - Duration::minutes(1))
            .await?;
        test.upload()
            .insert_slot(1, "live", now + Duration::minutes(10))
            .await?;
        test.upload()
            .insert_slot_uploaded_at(1, "receiving", now - Duration::minutes(1), now)
            .await?;
        let state: AppState = test.state();

        let service = UploadService::new(&state.db, &state.uploads);
        let stored = service.path_for(&abandoned.object_path);
        if let Some(parent) = stored.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&stored, b"stale").await?;

        assert_eq!(service.purge_stale().await.unwrap(), 2);
        assert!(!stored.exists());

        let repository = UploadSlotRepository::new(&state.db);
        assert!(repository.find_by_token("abandoned").await?.is_none());
        assert!(repository.find_by_token("expired").await?.is_none());
        assert!(repository.find_by_token("live").await?.is_some());
        assert!(repository.find_by_token("receiving").await?.is_some());

        Ok(())
    }
}

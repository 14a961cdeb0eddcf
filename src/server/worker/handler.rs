use apalis::prelude::Data;
use dioxus_logger::tracing;
use fred::prelude::Pool;
use sea_orm::DatabaseConnection;

use crate::server::{
    error::Error, model::worker::WorkerJob, service::video::VideoService, worker::queue,
};

pub async fn handle_job(
    job: WorkerJob,
    db: Data<DatabaseConnection>,
    tracker: Data<Pool>,
) -> Result<(), Error> {
    let result = match job {
        WorkerJob::AnalyzeVideo { video_id } => analyze_video(&db, video_id).await,
    };

    queue::release(&tracker, &job).await?;

    result
}

async fn analyze_video(db: &DatabaseConnection, video_id: i32) -> Result<(), Error> {
    tracing::debug!("Processing analysis for video {}", video_id);

    let processed = VideoService::new(db)
        .mark_processed(video_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to analyse video {}: {:?}", video_id, e);
            e
        })?;

    if processed {
        tracing::debug!("Successfully analysed video {}", video_id);
    } else {
        tracing::debug!("Video {} was already processed or no longer exists", video_id);
    }

    Ok(())
}

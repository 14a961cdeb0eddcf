use crate::server::{
    data::video::VideoRepository,
    error::Error,
    model::worker::WorkerJob,
    scheduler::{config::video_analysis::BATCH_LIMIT, SchedulerState},
};

/// Queues analysis for videos that have not been processed yet
pub async fn schedule_video_analysis(mut state: SchedulerState) -> Result<usize, Error> {
    let videos = VideoRepository::new(&state.db)
        .get_unprocessed(BATCH_LIMIT)
        .await?;

    let mut scheduled = 0;
    for video in videos {
        if state
            .queue
            .push(WorkerJob::AnalyzeVideo { video_id: video.id })
            .await?
        {
            scheduled += 1;
        }
    }

    Ok(scheduled)
}

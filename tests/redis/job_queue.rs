use apalis_redis::{Config as StorageConfig, RedisStorage};
use fred::prelude::*;
use pitchpass::server::{
    model::worker::WorkerJob,
    worker::queue::{release, JobQueue},
};
use pitchpass_test_utils::prelude::*;

const REDIS_URL: &str = "redis://127.0.0.1:6379";

/// Queue bound to a namespace no other test run shares
async fn job_queue() -> (JobQueue, Pool) {
    let namespace = format!("pitchpass-test:{:016x}", rand::random::<u64>());

    let conn = apalis_redis::connect(REDIS_URL).await.unwrap();
    let storage = RedisStorage::new_with_config(
        conn,
        StorageConfig::default().set_namespace(&namespace),
    );

    let tracker = Pool::new(Config::from_url(REDIS_URL).unwrap(), None, None, None, 2).unwrap();
    tracker.init().await.unwrap();

    (JobQueue::new(storage, tracker.clone()), tracker)
}

fn unique_job() -> WorkerJob {
    WorkerJob::AnalyzeVideo {
        video_id: rand::random::<u16>() as i32 + 1,
    }
}

#[tokio::test]
/// Expect a second push of the same job to be skipped while the first is tracked
async fn skips_duplicate_job() -> Result<(), TestError> {
    let (mut queue, tracker) = job_queue().await;
    let job = unique_job();

    assert!(queue.push(job.clone()).await.unwrap());
    assert!(!queue.push(job.clone()).await.unwrap());

    release(&tracker, &job).await.unwrap();

    Ok(())
}

#[tokio::test]
/// Expect a released job to be accepted again
async fn requeues_after_release() -> Result<(), TestError> {
    let (mut queue, tracker) = job_queue().await;
    let job = unique_job();

    assert!(queue.push(job.clone()).await.unwrap());
    release(&tracker, &job).await.unwrap();
    assert!(queue.push(job.clone()).await.unwrap());

    release(&tracker, &job).await.unwrap();

    Ok(())
}

use apalis::prelude::Storage;
use apalis_redis::RedisStorage;
use dioxus_logger::tracing;
use fred::prelude::*;

use crate::server::{error::Error, model::worker::WorkerJob};

/// How long a tracking key blocks duplicates when its job never reports back
const TRACKING_TTL_SECS: i64 = 60 * 60;

#[derive(Clone)]
pub struct JobQueue {
    storage: RedisStorage<WorkerJob>,
    tracker: Pool,
}

impl JobQueue {
    pub fn new(storage: RedisStorage<WorkerJob>, tracker: Pool) -> Self {
        Self { storage, tracker }
    }

    /// Push a job unless the same job is already queued
    ///
    /// # Returns
    /// - `Ok(true)` - Job was pushed to the queue
    /// - `Ok(false)` - An identical job is still tracked as queued
    /// - `Err(Error)` - Redis communication failed
    pub async fn push(&mut self, job: WorkerJob) -> Result<bool, Error> {
        let key = job.tracking_key();

        let claimed: Option<String> = self
            .tracker
            .set(
                &key,
                "queued",
                Some(Expiration::EX(TRACKING_TTL_SECS)),
                Some(SetOptions::NX),
                false,
            )
            .await?;

        if claimed.is_none() {
            return Ok(false);
        }

        if let Err(e) = self.storage.push(job).await {
            // Release the key so the next run can try again
            let _: i64 = self.tracker.del(&key).await?;

            return Err(e.into());
        }

        Ok(true)
    }
}

/// Removes the tracking key for a job that has finished
pub async fn release(tracker: &Pool, job: &WorkerJob) -> Result<(), Error> {
    let removed: i64 = tracker.del(job.tracking_key()).await?;

    if removed == 0 {
        tracing::debug!("Tracking key for {} had already expired", job);
    }

    Ok(())
}

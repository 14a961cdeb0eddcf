//! Scheduler for periodic background work.
//!
//! A cron-based job scheduler that queues analysis for unprocessed videos and purges expired
//! upload destinations at configured intervals.

use std::sync::Arc;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::Error, model::app::UploadSettings, worker::JobQueue};

pub mod config;
pub mod upload;
pub mod video;

use self::{upload::purge_stale_uploads, video::schedule_video_analysis};

use self::config::{upload_cleanup, video_analysis};

/// Handles passed to every scheduled job
#[derive(Clone)]
pub struct SchedulerState {
    pub db: DatabaseConnection,
    pub queue: JobQueue,
    pub uploads: UploadSettings,
}

/// Job scheduler for managing periodic background tasks.
pub struct Scheduler {
    state: SchedulerState,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(state: SchedulerState) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self { state, sched })
    }

    /// Registers all scheduled jobs and starts the scheduler.
    ///
    /// The following jobs are registered:
    /// - Video analysis queueing
    /// - Stale upload cleanup
    ///
    /// # Returns
    /// - `Ok(())` - All jobs successfully registered and scheduler started
    /// - `Err(Error)` - Failed to register a job or start the scheduler
    pub async fn start(mut self) -> Result<(), Error> {
        self.schedule_job(
            video_analysis::CRON_EXPRESSION,
            "video analysis",
            schedule_video_analysis,
        )
        .await?;

        self.schedule_job(
            upload_cleanup::CRON_EXPRESSION,
            "stale upload cleanup",
            purge_stale_uploads,
        )
        .await?;

        self.sched.start().await?;

        Ok(())
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// On execution, the job logs the number of items it handled (on success) or any error.
    ///
    /// # Arguments
    /// - `cron` - Cron expression defining when the job should run (e.g., "0 0 * * * *" for hourly)
    /// - `name` - Human-readable name for the job (used in log messages)
    /// - `function` - Async function performing the work, returning the count of items handled
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(SchedulerState) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<usize, Error>> + Send + 'static,
    {
        let state = self.state.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let state = state.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    match function(state).await {
                        Ok(count) => tracing::info!("Completed {} for {} item(s)", name, count),
                        Err(e) => tracing::error!("Error running {}: {:?}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}

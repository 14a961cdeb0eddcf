pub mod video_analysis {
    /// Most unprocessed videos queued per run
    pub const BATCH_LIMIT: u64 = 50;

    /// Runs every 5 minutes
    pub const CRON_EXPRESSION: &str = "0 */5 * * * *";
}

pub mod upload_cleanup {
    /// Runs every 30 minutes at 15 and 45 past the hour
    pub const CRON_EXPRESSION: &str = "0 15,45 * * * *";
}

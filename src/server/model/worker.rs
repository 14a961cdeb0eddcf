//! Worker job definitions for background task processing.
//!
//! Jobs are serialized to JSON for Redis storage and deserialized by the worker handler. Each
//! variant carries only the identifiers the handler needs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Background job types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum WorkerJob {
    /// Run match analysis for an uploaded video and mark it processed.
    AnalyzeVideo {
        /// Database ID of the video to analyse.
        video_id: i32,
    },
}

impl WorkerJob {
    /// Redis key used to keep the same job from being queued twice
    pub fn tracking_key(&self) -> String {
        match self {
            WorkerJob::AnalyzeVideo { video_id } => {
                format!("pitchpass:job:analyze_video:{}", video_id)
            }
        }
    }
}

impl fmt::Display for WorkerJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerJob::AnalyzeVideo { video_id } => write!(f, "AnalyzeVideo {{ video_id: {} }}", video_id),
        }
    }
}

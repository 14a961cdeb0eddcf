use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff
    Retry,
    /// Failed permanently
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => match db_err {
                // Connection acquisition errors are transient
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                // Query, conversion, and record errors won't resolve with a retry
                _ => ErrorRetryStrategy::Fail,
            },

            // Could be a Redis connection blip
            Self::SessionError(_) => ErrorRetryStrategy::Retry,
            Self::RedisError(_) => ErrorRetryStrategy::Retry,
            Self::ApalisRedisError(_) => ErrorRetryStrategy::Retry,

            Self::IoError(_) => ErrorRetryStrategy::Retry,

            Self::ConfigError(_)
            | Self::AuthError(_)
            | Self::TokenError(_)
            | Self::UploadError(_)
            | Self::WorkflowError(_)
            | Self::Validation(_)
            | Self::NotFound(_)
            | Self::ParseError(_)
            | Self::InternalError(_)
            | Self::SchedulerError(_)
            | Self::JsonError(_) => ErrorRetryStrategy::Fail,
        }
    }
}

use std::{future::Future, time::Duration};

use dioxus_logger::tracing;

use crate::server::error::{retry::ErrorRetryStrategy, Error};

/// Context for service methods providing retry logic
pub struct RetryContext {
    /// Max attempts before failure
    max_attempts: u32,
    /// Initial backoff between attempts
    initial_backoff_ms: u64,
}

impl RetryContext {
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    const DEFAULT_INITIAL_BACKOFF_MS: u64 = 250;

    pub fn new() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff_ms: Self::DEFAULT_INITIAL_BACKOFF_MS,
        }
    }

    /// Execute a method with automatic retry logic
    ///
    /// Transient failures (connection acquisition, Redis, filesystem) are retried with
    /// exponential backoff; anything else is returned immediately.
    ///
    /// # Arguments
    /// - `description`: Description of the operation for logging (e.g., "list players")
    /// - `operation`: Async function started fresh on every attempt
    pub async fn execute_with_retry<R, F, Fut>(
        &self,
        description: &str,
        operation: F,
    ) -> Result<R, Error>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<R, Error>>,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            let result = operation().await;

            match result {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff_ms = self.initial_backoff_ms * 2_u64.pow(attempt_count - 1);
                        let backoff = Duration::from_millis(backoff_ms);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicU32, Ordering},
        Arc,
    };

    use sea_orm::{DbErr, RuntimeErr};

    use crate::server::{error::Error, service::retry::RetryContext};

    /// Expect permanent errors to be returned after a single attempt
    #[tokio::test]
    async fn fails_fast_on_permanent_error() {
        let attempts = Arc::new(AtomicU32::new(0));
        let ctx = RetryContext::new();

        let result: Result<(), Error> = ctx
            .execute_with_retry("permanent failure", || {
                let attempts = attempts.clone();
                Box::pin(async move {
                    attempts.fetch_add(1, Ordering::SeqCst);
                    Err(Error::Validation("bad input".to_string()))
                })
            })
            .await;

        assert!(result.is_err());
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    /// Expect transient errors to be retried until the operation succeeds
    #[tokio::test]
    async fn retries_transient_error() {
        let attempts = Arc::new(AtomicU32::new(0));
        let ctx = RetryContext::new();

        let result = ctx
            .execute_with_retry("transient failure", || {
                let attempts = attempts.clone();
                Box::pin(async move {
                    if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                        return Err(Error::DbErr(DbErr::Conn(RuntimeErr::Internal(
                            "connection reset".to_string(),
                        ))));
                    }
                    Ok(42)
                })
            })
            .await;

        assert!(matches!(result, Ok(42)));
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }
}

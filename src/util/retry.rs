use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Classifies an error as transient or permanent.
///
/// The retry policy only re-runs operations whose error says it is
/// retryable; a rejected statement or a missing path fails immediately.
pub trait Retryable {
    fn is_retryable(&self) -> bool;
}

/// Retry policy applied at the walker and size-resolver call sites.
///
/// Wraps an async operation with up to `max_retries` additional attempts and
/// exponential backoff (100ms, 200ms, 400ms, ...). The wrapped clients never
/// retry internally; the policy owns the whole attempt budget.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_retries: usize,
}

impl RetryPolicy {
    /// Create a policy with the given number of retries on top of the first attempt.
    ///
    /// `RetryPolicy::new(0)` runs every operation exactly once.
    pub fn new(max_retries: usize) -> Self {
        Self { max_retries }
    }

    /// Run `operation`, retrying retryable errors with exponential backoff.
    ///
    /// # Arguments
    ///
    /// * `operation_name` - Name of the operation for logging purposes
    /// * `operation` - The async operation to run
    ///
    /// # Returns
    ///
    /// The first `Ok` result, or the last error once the attempt budget is
    /// spent or a non-retryable error occurs.
    pub async fn retry<F, Fut, T, E>(&self, operation_name: &str, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Retryable + Display,
    {
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    if !e.is_retryable() || attempt == self.max_retries {
                        return Err(e);
                    }

                    warn!(
                        "Retryable error in {} (attempt {}/{}): {}",
                        operation_name,
                        attempt + 1,
                        self.max_retries,
                        e
                    );

                    last_error = Some(e);

                    // Exponential backoff: 100ms, 200ms, 400ms, 800ms, 1600ms, ...
                    let backoff_ms = 100 * (1 << attempt.min(10));
                    tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                }
            }
        }

        Err(last_error.unwrap())
    }
}

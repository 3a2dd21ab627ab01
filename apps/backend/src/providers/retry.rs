//! Bounded retry with a fixed delay between attempts.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Retries a fallible async operation up to `max_retries` extra times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    /// A policy that makes exactly one attempt.
    pub fn none() -> Self {
        Self::new(0, Duration::ZERO)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_retries + 1
    }

    /// Run `operation` sequentially until it succeeds or retries run out.
    ///
    /// The error of the last attempt is returned as is.
    pub async fn run<T, E, F, Fut>(&self, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let mut remaining = self.max_retries;
        let mut attempt = 1;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) if remaining > 0 => {
                    tracing::warn!(
                        attempt,
                        remaining,
                        delay_ms = self.delay.as_millis() as u64,
                        "Attempt failed, retrying: {}",
                        err
                    );
                    tokio::time::sleep(self.delay).await;
                    remaining -= 1;
                    attempt += 1;
                }
                Err(err) => {
                    tracing::error!(attempt, "Giving up after {} attempts: {}", attempt, err);
                    return Err(err);
                }
            }
        }
    }
}

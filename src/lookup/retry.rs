use std::time::Duration;

use crate::utils::constants::DEFAULT_RETRY_DELAY_SECS;

/// Pacing policy for transient lookup failures.
///
/// The delay doubles as a rate-limit guard: the service allows on the order
/// of 60 calls per minute, so a one-second pause before re-attempting keeps
/// the retry loop under the cap. `max_attempts` of `None` retries until the
/// call succeeds or fails permanently, which is the reference behavior.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    delay: Duration,
    max_attempts: Option<u32>,
}

impl RetryPolicy {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            max_attempts: None,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether a further attempt is allowed after `attempts` transient
    /// failures.
    pub fn allows_retry(&self, attempts: u32) -> bool {
        match self.max_attempts {
            Some(max) => attempts < max,
            None => true,
        }
    }

    /// Blocks the pipeline for the pacing delay. Tests construct policies
    /// with a zero delay so nothing actually sleeps.
    pub async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_RETRY_DELAY_SECS))
    }
}

//! Write retry policy.
//!
//! A failed write pass (every endpoint failed) is retried after a linear
//! backoff: pass `n` is followed by a wait of `n × step`, capped at
//! `max_delay`. Reads are never retried; they fall back to the cache instead.

use folio_config::SyncConfig;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of passes (including the initial one).
    pub max_attempts: u32,
    /// Backoff unit; the wait after pass `n` is `n × step`.
    pub step: Duration,
    /// Maximum delay between passes (backoff is capped here).
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            step: Duration::from_secs(1),
            max_delay: Duration::from_secs(5),
        }
    }
}

impl From<&SyncConfig> for RetryPolicy {
    fn from(config: &SyncConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            step: config.backoff_step(),
            max_delay: config.max_backoff(),
        }
    }
}

impl RetryPolicy {
    /// Passes to run; never less than one.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Wait after the 1-based pass `attempt` before the next one.
    #[must_use]
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.step.saturating_mul(attempt).min(self.max_delay)
    }
}

//! Write retry policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of passes over the endpoint list.
const fn default_max_attempts() -> u32 {
    3
}

/// Default backoff step; pass `n` waits `n × step` before the next one.
const fn default_backoff_step_ms() -> u64 {
    1000
}

const fn default_max_backoff_ms() -> u64 {
    5000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SyncConfig {
    /// Passes over the full endpoint list before a write is given up.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Linear backoff step in milliseconds.
    #[serde(default = "default_backoff_step_ms")]
    pub backoff_step_ms: u64,

    /// Upper bound for a single backoff wait in milliseconds.
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            backoff_step_ms: default_backoff_step_ms(),
            max_backoff_ms: default_max_backoff_ms(),
        }
    }
}

impl SyncConfig {
    #[must_use]
    pub const fn backoff_step(&self) -> Duration {
        Duration::from_millis(self.backoff_step_ms)
    }

    #[must_use]
    pub const fn max_backoff(&self) -> Duration {
        Duration::from_millis(self.max_backoff_ms)
    }
}

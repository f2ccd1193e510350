//! Snapshot polling configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Periodic pull of full snapshots
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PollingConfig {
    /// Enable the periodic refresh
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Interval between refreshes in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub interval_ms: u64,
    /// Fetch every kind once when the client starts
    #[serde(default = "default_true")]
    pub fetch_on_start: bool,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: default_poll_interval_ms(),
            fetch_on_start: true,
        }
    }
}

impl PollingConfig {
    /// Merge polling configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = other.enabled;
        }
        if other.interval_ms != default_poll_interval_ms() {
            self.interval_ms = other.interval_ms;
        }
        if !other.fetch_on_start {
            self.fetch_on_start = other.fetch_on_start;
        }
        self
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

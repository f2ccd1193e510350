//! Push channel configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Push channel configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelConfig {
    /// Open the push channel at all
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Fixed delay before each reconnect attempt, in milliseconds
    #[serde(default = "default_reconnect_delay_ms")]
    pub reconnect_delay_ms: u64,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            reconnect_delay_ms: default_reconnect_delay_ms(),
        }
    }
}

impl ChannelConfig {
    /// Merge channel configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = other.enabled;
        }
        if other.reconnect_delay_ms != default_reconnect_delay_ms() {
            self.reconnect_delay_ms = other.reconnect_delay_ms;
        }
        self
    }

    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_delay_ms)
    }
}

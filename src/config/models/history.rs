//! Sliding window configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Capacities of the time-series windows kept for the counter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryConfig {
    /// Samples kept for the total packet counter
    #[serde(default = "default_history_capacity")]
    pub packet_capacity: usize,
    /// Samples kept for the derived rate
    #[serde(default = "default_history_capacity")]
    pub rate_capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            packet_capacity: default_history_capacity(),
            rate_capacity: default_history_capacity(),
        }
    }
}

impl HistoryConfig {
    /// Merge history configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.packet_capacity != default_history_capacity() {
            self.packet_capacity = other.packet_capacity;
        }
        if other.rate_capacity != default_history_capacity() {
            self.rate_capacity = other.rate_capacity;
        }
        self
    }
}

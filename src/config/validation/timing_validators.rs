//! Timing and capacity validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::warn;

/// Upper bound for any single sliding window
const MAX_HISTORY_CAPACITY: usize = 100_000;

impl Validate for PollingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.interval_ms == 0 {
            return Err("Poll interval must be greater than 0 when polling is enabled".to_string());
        }

        if self.enabled && self.interval_ms < 1_000 {
            warn!(
                "Poll interval of {}ms is below one second; the server will be polled aggressively",
                self.interval_ms
            );
        }

        Ok(())
    }
}

impl Validate for ChannelConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.reconnect_delay_ms == 0 {
            return Err("Reconnect delay must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Validate for HistoryConfig {
    fn validate(&self) -> Result<(), String> {
        if self.packet_capacity == 0 || self.rate_capacity == 0 {
            return Err("History capacities must be greater than 0".to_string());
        }

        if self.packet_capacity > MAX_HISTORY_CAPACITY || self.rate_capacity > MAX_HISTORY_CAPACITY
        {
            return Err(format!(
                "History capacities cannot exceed {}",
                MAX_HISTORY_CAPACITY
            ));
        }

        Ok(())
    }
}

//! Configuration loading utilities
//!
//! This module provides loading of the client configuration from `NETMON_*`
//! environment variables.

use super::models::*;
use crate::utils::error::{MonitorError, Result};
use std::env;
use std::str::FromStr;
use tracing::debug;

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().overlay_vars(lookup)
    }

    /// Replace exactly the settings whose variables `lookup` returns
    pub fn overlay_vars<F>(self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Applying environment variable overrides");

        let mut config = self;

        // Server configuration
        if let Some(url) = lookup("NETMON_SERVER_URL") {
            config.server.base_url = url;
        }
        if let Some(path) = lookup("NETMON_UPDATES_PATH") {
            config.server.updates_path = path;
        }
        if let Some(url) = lookup("NETMON_UPDATES_URL") {
            config.server.updates_url = Some(url);
        }
        if let Some(timeout) = lookup("NETMON_REQUEST_TIMEOUT_SECS") {
            config.server.request_timeout_secs = parse_var("NETMON_REQUEST_TIMEOUT_SECS", &timeout)?;
        }

        // Polling configuration
        if let Some(enabled) = lookup("NETMON_POLL_ENABLED") {
            config.polling.enabled = parse_var("NETMON_POLL_ENABLED", &enabled)?;
        }
        if let Some(interval) = lookup("NETMON_POLL_INTERVAL_MS") {
            config.polling.interval_ms = parse_var("NETMON_POLL_INTERVAL_MS", &interval)?;
        }

        // Channel configuration
        if let Some(enabled) = lookup("NETMON_CHANNEL_ENABLED") {
            config.channel.enabled = parse_var("NETMON_CHANNEL_ENABLED", &enabled)?;
        }
        if let Some(delay) = lookup("NETMON_RECONNECT_DELAY_MS") {
            config.channel.reconnect_delay_ms = parse_var("NETMON_RECONNECT_DELAY_MS", &delay)?;
        }

        // History configuration
        if let Some(capacity) = lookup("NETMON_HISTORY_CAPACITY") {
            let capacity: usize = parse_var("NETMON_HISTORY_CAPACITY", &capacity)?;
            config.history.packet_capacity = capacity;
            config.history.rate_capacity = capacity;
        }

        // Logging configuration
        if let Some(level) = lookup("NETMON_LOG_LEVEL") {
            config.logging.level = level.parse()?;
        }
        if let Some(format) = lookup("NETMON_LOG_FORMAT") {
            config.logging.format = format.parse()?;
        }

        Ok(config)
    }
}

fn parse_var<T>(name: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| MonitorError::Config(format!("Invalid value for {}: {}", name, e)))
}

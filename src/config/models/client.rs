//! Main client configuration

#![allow(missing_docs)]

use super::*;
use serde::{Deserialize, Serialize};

/// Main client configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ClientConfig {
    /// Server endpoints
    #[serde(default)]
    pub server: ServerConfig,
    /// Snapshot polling
    #[serde(default)]
    pub polling: PollingConfig,
    /// Push channel
    #[serde(default)]
    pub channel: ChannelConfig,
    /// Time-series windows
    #[serde(default)]
    pub history: HistoryConfig,
    /// Console presenter
    #[serde(default)]
    pub display: DisplayConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.polling = self.polling.merge(other.polling);
        self.channel = self.channel.merge(other.channel);
        self.history = self.history.merge(other.history);
        self.display = self.display.merge(other.display);
        self.logging = self.logging.merge(other.logging);
        self
    }
}

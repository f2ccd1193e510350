//! Configuration management for the live client
//!
//! This module handles loading, validation, and merging of the client configuration.

mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{MonitorError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the client
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Client configuration
    pub client: ClientConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let config = Self {
            client: read_client_config(path).await?,
        };

        // Configuration
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let client = ClientConfig::from_env()?;
        let config = Self { client };

        config.validate()?;
        Ok(config)
    }

    /// Load from an optional file, then let environment variables take precedence
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok()).await
    }

    /// Like [`Config::load`], reading variables through `lookup`
    ///
    /// Only the settings whose variables are present are replaced; the rest
    /// keep the file's values.
    pub async fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client = match path {
            Some(path) => {
                info!("Loading configuration from: {:?}", path);
                read_client_config(path).await?
            }
            None => ClientConfig::default(),
        };

        let config = Self {
            client: client.overlay_vars(lookup)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.client.server
    }

    /// Get polling configuration
    pub fn polling(&self) -> &PollingConfig {
        &self.client.polling
    }

    /// Get push channel configuration
    pub fn channel(&self) -> &ChannelConfig {
        &self.client.channel
    }

    /// Get history configuration
    pub fn history(&self) -> &HistoryConfig {
        &self.client.history
    }

    /// Get display configuration
    pub fn display(&self) -> &DisplayConfig {
        &self.client.display
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.client.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.client
            .server
            .validate()
            .map_err(|e| MonitorError::Config(format!("Server config error: {}", e)))?;

        self.client
            .validate()
            .map_err(|e| MonitorError::Config(format!("Client config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.client = self.client.merge(other.client);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.client)
            .map_err(|e| MonitorError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.client)
            .map_err(|e| MonitorError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

async fn read_client_config(path: &Path) -> Result<ClientConfig> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| MonitorError::Config(format!("Failed to read config file: {}", e)))?;

    serde_yaml::from_str(&content)
        .map_err(|e| MonitorError::Config(format!("Failed to parse config: {}", e)))
}

//! Main configuration validators
//!
//! This module provides validation implementations for the top-level client
//! configuration and the server endpoint configuration.

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;
use url::Url;

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating client configuration");

        self.server.validate_section("server")?;
        self.polling.validate_section("polling")?;
        self.channel.validate_section("channel")?;
        self.history.validate_section("history")?;
        self.display.validate_section("display")?;

        if !self.polling.enabled && !self.polling.fetch_on_start && !self.channel.enabled {
            return Err(
                "Nothing to do: polling, the start-up fetch and the push channel are all disabled"
                    .to_string(),
            );
        }

        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("Server base URL '{}' is invalid: {}", self.base_url, e))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(format!(
                    "Server base URL must use http:// or https://, got: {}",
                    scheme
                ));
            }
        }

        if url.host_str().is_none() {
            return Err("Server base URL must have a host".to_string());
        }

        if !self.updates_path.starts_with('/') {
            return Err("Updates path must start with '/'".to_string());
        }

        if let Some(explicit) = &self.updates_url {
            let url = Url::parse(explicit)
                .map_err(|e| format!("Updates URL '{}' is invalid: {}", explicit, e))?;
            if !matches!(url.scheme(), "ws" | "wss") {
                return Err(format!(
                    "Updates URL must use ws:// or wss://, got: {}",
                    url.scheme()
                ));
            }
        }

        if self.request_timeout_secs == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }

        if self.user_agent.is_empty() {
            return Err("User agent cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_label_width < 4 {
            return Err("Label width must be at least 4 characters".to_string());
        }
        Ok(())
    }
}

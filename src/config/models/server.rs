//! Server endpoint configuration

use super::*;
use crate::utils::error::{MonitorError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Where the metrics server lives and how to talk to it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the pull API, e.g. `http://127.0.0.1:8000`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the push endpoint, appended to the base URL
    #[serde(default = "default_updates_path")]
    pub updates_path: String,
    /// Explicit push endpoint; overrides the derived one
    #[serde(default)]
    pub updates_url: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// User agent sent with snapshot requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            updates_path: default_updates_path(),
            updates_url: None,
            request_timeout_secs: default_request_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl ServerConfig {
    /// Merge server configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.base_url != default_base_url() {
            self.base_url = other.base_url;
        }
        if other.updates_path != default_updates_path() {
            self.updates_path = other.updates_path;
        }
        if other.updates_url.is_some() {
            self.updates_url = other.updates_url;
        }
        if other.request_timeout_secs != default_request_timeout() {
            self.request_timeout_secs = other.request_timeout_secs;
        }
        if other.user_agent != default_user_agent() {
            self.user_agent = other.user_agent;
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// WebSocket URL of the push channel
    ///
    /// Derived from the base URL (`http` becomes `ws`, `https` becomes `wss`)
    /// unless `updates_url` is set.
    pub fn updates_url(&self) -> Result<Url> {
        if let Some(explicit) = &self.updates_url {
            return Ok(Url::parse(explicit)?);
        }

        let mut url = Url::parse(&self.base_url)?;
        let scheme = match url.scheme() {
            "http" | "ws" => "ws",
            "https" | "wss" => "wss",
            other => {
                return Err(MonitorError::Config(format!(
                    "Cannot derive a WebSocket URL from scheme '{}'",
                    other
                )));
            }
        };
        url.set_scheme(scheme)
            .map_err(|_| MonitorError::Config(format!("Cannot switch scheme to '{}'", scheme)))?;

        let path = add_path_to_base(url.path(), &self.updates_path);
        url.set_path(&path);
        url.set_query(None);
        url.set_fragment(None);
        Ok(url)
    }
}

/// Join a base and a path with exactly one separating slash
pub fn add_path_to_base(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

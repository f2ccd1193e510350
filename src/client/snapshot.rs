//! Pull API client
//!
//! One GET per metric kind; each body is decoded into a [`SnapshotPayload`].

use crate::config::ServerConfig;
use crate::core::types::{MetricKind, SnapshotPayload};
use crate::utils::error::{MonitorError, Result};
use reqwest::{Client, ClientBuilder};
use tracing::{debug, error};
use url::Url;

/// Fetches point-in-time snapshots from the monitor's HTTP API
#[derive(Debug, Clone)]
pub struct SnapshotFetcher {
    http_client: Client,
    base_url: String,
}

impl SnapshotFetcher {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let http_client = ClientBuilder::new()
            .timeout(config.request_timeout())
            .user_agent(&config.user_agent)
            .build()?;

        // Parse once so a bad base URL fails at construction
        Url::parse(&config.base_url)?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the pull endpoint for `kind`
    pub fn endpoint(&self, kind: MetricKind) -> Result<Url> {
        let joined = crate::config::add_path_to_base(&self.base_url, kind.snapshot_path());
        Ok(Url::parse(&joined)?)
    }

    /// Fetch and decode the current value of `kind`
    ///
    /// Fails on transport errors, non-2xx statuses, and bodies that do not
    /// carry the field for `kind`.
    pub async fn fetch_snapshot(&self, kind: MetricKind) -> Result<SnapshotPayload> {
        let url = self.endpoint(kind)?;
        debug!("Fetching {} snapshot from {}", kind, url);

        let response = self.http_client.get(url.clone()).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Snapshot request failed: {} - {}", status, error_text);
            return Err(MonitorError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        SnapshotPayload::from_slice(kind, &body)
    }
}

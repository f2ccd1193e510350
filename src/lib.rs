//! # netmon-live
//!
//! Live client for a network traffic monitor. Keeps a local copy of the
//! monitor's metrics current by pulling snapshots over HTTP and listening for
//! pushed updates over a WebSocket, and derives a packet rate from the
//! cumulative counter.
//!
//! ## Features
//!
//! - **Pull + push**: start-up and periodic snapshots, plus a push channel
//!   that reconnects after a fixed delay
//! - **Sliding windows**: bounded history of the packet counter and its rate
//! - **Presenter seam**: any [`PresentationAdapter`] is notified after every
//!   store write
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use netmon_live::{Config, LiveClient, LogPresenter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(None).await?;
//!     let presenter = LogPresenter::new(config.display().clone());
//!     let mut client = LiveClient::new(config.client, presenter)?;
//!
//!     let handle = client.handle();
//!     tokio::spawn(async move {
//!         let _ = tokio::signal::ctrl_c().await;
//!         let _ = handle.shutdown();
//!     });
//!
//!     client.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod client;
pub mod config;
pub mod core;
pub mod monitoring;
pub mod presentation;
pub mod utils;

// Re-export main types
pub use client::{ClientHandle, ConnectionState, LiveClient, SnapshotFetcher};
pub use config::Config;
pub use core::types::{MetricKind, SnapshotPayload};
pub use monitoring::{DataStatus, MetricStore, StoreUpdate};
pub use presentation::{LogPresenter, PresentationAdapter};
pub use utils::error::{MonitorError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    /// Seconds since the epoch at build time
    pub build_time: &'static str,
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
        }
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}

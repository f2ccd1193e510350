//! Configuration data models
//!
//! This module defines all configuration structures used by the client.

#![allow(missing_docs)]

pub mod channel;
pub mod client;
pub mod display;
pub mod history;
pub mod logging;
pub mod polling;
pub mod server;

// Re-export all configuration types
pub use channel::*;
pub use client::*;
pub use display::*;
pub use history::*;
pub use logging::*;
pub use polling::*;
pub use server::*;

/// Default base URL of the metrics server
pub fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

/// Default path of the push endpoint
pub fn default_updates_path() -> String {
    "/ws/updates".to_string()
}

/// Default HTTP request timeout in seconds
pub fn default_request_timeout() -> u64 {
    10
}

pub fn default_user_agent() -> String {
    format!("netmon-live/{}", env!("CARGO_PKG_VERSION"))
}

/// Default snapshot poll interval in milliseconds
pub fn default_poll_interval_ms() -> u64 {
    5_000
}

/// Default delay before a reconnect attempt in milliseconds
pub fn default_reconnect_delay_ms() -> u64 {
    5_000
}

/// Default capacity of the packet and rate windows
pub fn default_history_capacity() -> usize {
    60
}

pub fn default_max_connection_rows() -> usize {
    20
}

pub fn default_max_label_width() -> usize {
    40
}

pub fn default_true() -> bool {
    true
}

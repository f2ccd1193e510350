//! Error handling for the live client
//!
//! This module defines all error types used throughout the client.

#![allow(missing_docs)]

use super::utils::ErrorCategory;
use crate::core::types::MetricKind;
use thiserror::Error;

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Main error type for the client
#[derive(Error, Debug)]
pub enum MonitorError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Non-success HTTP status from the pull API
    #[error("Unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// WebSocket and other transport errors
    #[error("Transport error: {0}")]
    Transport(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing errors
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The body did not carry the field expected for its kind
    #[error("Missing field '{field}' in {kind} payload")]
    MissingField { kind: MetricKind, field: &'static str },

    /// The payload decoded for one kind was applied to another
    #[error("Payload for {actual} cannot be applied to {expected}")]
    KindMismatch {
        expected: MetricKind,
        actual: MetricKind,
    },

    /// The server answered with its own `{"error": ...}` body
    #[error("Server reported: {0}")]
    Server(String),

    /// Parsing errors
    #[error("Parsing error: {0}")]
    Parsing(String),

    /// The event loop is gone
    #[error("Client event loop closed")]
    LoopClosed,
}

impl MonitorError {
    /// Classify the error for recovery decisions
    pub fn category(&self) -> ErrorCategory {
        match self {
            MonitorError::HttpClient(_)
            | MonitorError::Status { .. }
            | MonitorError::Transport(_)
            | MonitorError::Io(_) => ErrorCategory::Transport,
            MonitorError::Serialization(_)
            | MonitorError::MissingField { .. }
            | MonitorError::KindMismatch { .. }
            | MonitorError::Server(_)
            | MonitorError::Parsing(_) => ErrorCategory::Decode,
            MonitorError::Config(_) | MonitorError::Yaml(_) | MonitorError::Url(_) => {
                ErrorCategory::Config
            }
            MonitorError::LoopClosed => ErrorCategory::Internal,
        }
    }

    /// Whether the failure came from the network
    pub fn is_transport(&self) -> bool {
        self.category() == ErrorCategory::Transport
    }

    /// Whether the failure came from a payload that could not be decoded
    pub fn is_decode(&self) -> bool {
        self.category() == ErrorCategory::Decode
    }

    pub fn config(message: impl Into<String>) -> Self {
        MonitorError::Config(message.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        MonitorError::Transport(message.into())
    }
}

//! Push channel messages

use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tag of the server-computed rate event
pub const TRAFFIC_RATE_TAG: &str = "traffic_rate";

/// One message received on the push channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushMessage {
    /// Event tag, e.g. `total_packets`
    #[serde(rename = "type")]
    pub event_type: String,
    /// Payload, shaped like the matching pull body
    #[serde(default)]
    pub data: Value,
}

impl PushMessage {
    pub fn new(event_type: impl Into<String>, data: Value) -> Self {
        Self {
            event_type: event_type.into(),
            data,
        }
    }

    /// Parse one text frame
    pub fn parse(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Payload of a `traffic_rate` event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrafficRate {
    pub traffic_rate: f64,
}

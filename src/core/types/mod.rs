//! Core type definition module
//!
//! Metric kinds, snapshot payloads and push messages

pub mod metrics;
pub mod payload;
pub mod push;

// Re-export all public types
pub use metrics::MetricKind;
pub use payload::{Connection, ProtocolCount, SnapshotPayload, UNRESOLVED_DOMAIN};
pub use push::{PushMessage, TRAFFIC_RATE_TAG, TrafficRate};

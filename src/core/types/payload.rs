//! Snapshot payloads
//!
//! Field names follow the monitor's CSV headers verbatim ("Packet Count",
//! "Source IP", ...), which is what the server echoes back as JSON.

use super::metrics::MetricKind;
use crate::utils::error::{MonitorError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Placeholder the capture side writes for unresolved domains
pub const UNRESOLVED_DOMAIN: &str = "N/A";

/// Packets observed for one protocol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolCount {
    #[serde(rename = "Protocol")]
    pub protocol: String,
    #[serde(rename = "Packet Count")]
    pub packet_count: u64,
}

/// One observed connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    #[serde(rename = "Source IP")]
    pub source_ip: String,
    #[serde(rename = "Source Port")]
    pub source_port: u16,
    #[serde(rename = "Source Domain", default = "unresolved", deserialize_with = "domain")]
    pub source_domain: String,
    #[serde(rename = "Destination IP")]
    pub destination_ip: String,
    #[serde(rename = "Destination Port")]
    pub destination_port: u16,
    #[serde(
        rename = "Destination Domain",
        default = "unresolved",
        deserialize_with = "domain"
    )]
    pub destination_domain: String,
    #[serde(rename = "Protocol")]
    pub protocol: String,
}

fn unresolved() -> String {
    UNRESOLVED_DOMAIN.to_string()
}

// pandas reads "N/A" back as NaN, which reaches us as null
fn domain<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .filter(|s| !s.is_empty())
        .unwrap_or_else(unresolved))
}

/// A full value of one metric kind
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotPayload {
    TotalPackets(u64),
    ProtocolCounts(Vec<ProtocolCount>),
    Connections(Vec<Connection>),
}

impl SnapshotPayload {
    pub fn kind(&self) -> MetricKind {
        match self {
            SnapshotPayload::TotalPackets(_) => MetricKind::TotalPackets,
            SnapshotPayload::ProtocolCounts(_) => MetricKind::ProtocolCounts,
            SnapshotPayload::Connections(_) => MetricKind::Connections,
        }
    }

    /// Decode a body of the form `{"<kind field>": ...}`
    ///
    /// A missing or null field is a decode error. When the field is absent and
    /// the body carries the server's `{"error": "..."}` report, that message is
    /// returned instead.
    pub fn decode(kind: MetricKind, body: &Value) -> Result<Self> {
        let object = body.as_object().ok_or_else(|| {
            MonitorError::Parsing(format!("{} body is not a JSON object", kind))
        })?;

        let field = match object.get(kind.field_name()) {
            Some(value) if !value.is_null() => value.clone(),
            _ => {
                if let Some(reason) = object.get("error").and_then(Value::as_str) {
                    return Err(MonitorError::Server(reason.to_string()));
                }
                return Err(MonitorError::MissingField {
                    kind,
                    field: kind.field_name(),
                });
            }
        };

        let payload = match kind {
            MetricKind::TotalPackets => SnapshotPayload::TotalPackets(serde_json::from_value(field)?),
            MetricKind::ProtocolCounts => {
                SnapshotPayload::ProtocolCounts(serde_json::from_value(field)?)
            }
            MetricKind::Connections => SnapshotPayload::Connections(serde_json::from_value(field)?),
        };

        Ok(payload)
    }

    /// Decode raw bytes, as received from the pull API
    pub fn from_slice(kind: MetricKind, bytes: &[u8]) -> Result<Self> {
        let body: Value = serde_json::from_slice(bytes)?;
        Self::decode(kind, &body)
    }

    /// Encode back into the wire body shape
    pub fn to_body(&self) -> Value {
        let field = match self {
            SnapshotPayload::TotalPackets(total) => Value::from(*total),
            SnapshotPayload::ProtocolCounts(counts) => {
                serde_json::to_value(counts).unwrap_or(Value::Null)
            }
            SnapshotPayload::Connections(connections) => {
                serde_json::to_value(connections).unwrap_or(Value::Null)
            }
        };
        let mut body = serde_json::Map::new();
        body.insert(self.kind().field_name().to_string(), field);
        Value::Object(body)
    }
}

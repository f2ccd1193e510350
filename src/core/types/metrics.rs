//! Metric kinds

use serde::{Deserialize, Serialize};

/// The metric kinds served by the monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Cumulative packet counter
    TotalPackets,
    /// Per-protocol packet counts
    ProtocolCounts,
    /// Observed connection tuples
    Connections,
}

impl MetricKind {
    /// Every kind, in the order they are fetched at start-up
    pub const ALL: [MetricKind; 3] = [
        MetricKind::TotalPackets,
        MetricKind::ProtocolCounts,
        MetricKind::Connections,
    ];

    /// Wire tag; also the JSON field carrying the payload
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::TotalPackets => "total_packets",
            MetricKind::ProtocolCounts => "protocol_counts",
            MetricKind::Connections => "connections",
        }
    }

    /// JSON field that carries the payload in pull and push bodies
    pub fn field_name(&self) -> &'static str {
        self.as_str()
    }

    /// Path of the pull endpoint, relative to the server base URL
    pub fn snapshot_path(&self) -> &'static str {
        match self {
            MetricKind::TotalPackets => "/metrics/total_packets",
            MetricKind::ProtocolCounts => "/metrics/protocol_counts",
            MetricKind::Connections => "/metrics/connections",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MetricKind::TotalPackets => "Total Packets",
            MetricKind::ProtocolCounts => "Protocol Counts",
            MetricKind::Connections => "Connections",
        }
    }

    /// Whether the kind keeps a time series
    pub fn is_counter(&self) -> bool {
        matches!(self, MetricKind::TotalPackets)
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MetricKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "total_packets" => Ok(MetricKind::TotalPackets),
            "protocol_counts" => Ok(MetricKind::ProtocolCounts),
            "connections" => Ok(MetricKind::Connections),
            _ => Err(format!("Unknown metric kind: {}", s)),
        }
    }
}

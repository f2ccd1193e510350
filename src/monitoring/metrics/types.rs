//! Types for metrics storage

use super::bounded::TimeSeriesBuffer;
use crate::core::types::{Connection, MetricKind, ProtocolCount};

/// Load state of one metric kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DataStatus {
    /// Nothing received yet
    #[default]
    Empty,
    /// Latest value is current
    Ready,
    /// The most recent fetch or push failed; any earlier value is stale
    Error(String),
}

impl DataStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, DataStatus::Ready)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DataStatus::Error(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            DataStatus::Error(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Borrowed latest value of one kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue<'a> {
    TotalPackets(u64),
    ProtocolCounts(&'a [ProtocolCount]),
    Connections(&'a [Connection]),
}

impl MetricValue<'_> {
    pub fn kind(&self) -> MetricKind {
        match self {
            MetricValue::TotalPackets(_) => MetricKind::TotalPackets,
            MetricValue::ProtocolCounts(_) => MetricKind::ProtocolCounts,
            MetricValue::Connections(_) => MetricKind::Connections,
        }
    }
}

/// Read-only view of the store for one kind, handed to presenters
#[derive(Debug, Clone, Copy)]
pub struct StoreUpdate<'a> {
    pub kind: MetricKind,
    pub value: Option<MetricValue<'a>>,
    pub status: &'a DataStatus,
    /// Counter window; only set for counter kinds
    pub history: Option<&'a TimeSeriesBuffer>,
    /// Derived rate window; only set for counter kinds
    pub rate_history: Option<&'a TimeSeriesBuffer>,
    /// Last rate reported by the server, if any
    pub reported_rate: Option<f64>,
}

impl StoreUpdate<'_> {
    pub fn is_error(&self) -> bool {
        self.status.is_error()
    }

    /// Newest client-derived rate
    pub fn latest_rate(&self) -> Option<f64> {
        self.rate_history
            .and_then(|buffer| buffer.latest())
            .map(|sample| sample.value)
    }
}

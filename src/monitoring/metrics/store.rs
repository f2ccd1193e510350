//! Latest value, load status and history per metric kind

use super::bounded::{PushOutcome, Sample, TimeSeriesBuffer};
use super::rate::RateDerivator;
use super::types::{DataStatus, MetricValue, StoreUpdate};
use crate::config::HistoryConfig;
use crate::core::types::{Connection, MetricKind, ProtocolCount, SnapshotPayload};
use crate::utils::error::{MonitorError, Result};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, warn};

static EMPTY_STATUS: DataStatus = DataStatus::Empty;

/// Single source of truth for the presentation layer
///
/// Owned by the client event loop; every write goes through `&mut self`.
#[derive(Debug)]
pub struct MetricStore {
    total_packets: Option<u64>,
    protocol_counts: Option<Vec<ProtocolCount>>,
    connections: Option<Vec<Connection>>,
    status: HashMap<MetricKind, DataStatus>,
    packet_history: TimeSeriesBuffer,
    rate_history: TimeSeriesBuffer,
    rate: RateDerivator,
    reported_rate: Option<f64>,
    writes: u64,
}

impl MetricStore {
    pub fn new(config: &HistoryConfig) -> Self {
        Self::with_capacity(config.packet_capacity, config.rate_capacity)
    }

    pub fn with_capacity(packet_capacity: usize, rate_capacity: usize) -> Self {
        Self {
            total_packets: None,
            protocol_counts: None,
            connections: None,
            status: HashMap::new(),
            packet_history: TimeSeriesBuffer::new(packet_capacity),
            rate_history: TimeSeriesBuffer::new(rate_capacity),
            rate: RateDerivator::new(),
            reported_rate: None,
            writes: 0,
        }
    }

    /// Replace the latest value of `kind`, stamped with the current instant
    pub fn apply(&mut self, kind: MetricKind, payload: SnapshotPayload) -> Result<()> {
        self.apply_at(kind, payload, Instant::now())
    }

    /// Replace the latest value of `kind` as observed at `at`
    ///
    /// Clears any error flag on the kind. For the counter kind the value is
    /// also appended to the history window and fed to the rate derivator.
    pub fn apply_at(
        &mut self,
        kind: MetricKind,
        payload: SnapshotPayload,
        at: Instant,
    ) -> Result<()> {
        if payload.kind() != kind {
            return Err(MonitorError::KindMismatch {
                expected: kind,
                actual: payload.kind(),
            });
        }

        match payload {
            SnapshotPayload::TotalPackets(total) => {
                self.total_packets = Some(total);
                self.record_counter(Sample::new(at, total as f64));
            }
            SnapshotPayload::ProtocolCounts(counts) => {
                self.protocol_counts = Some(counts);
            }
            SnapshotPayload::Connections(connections) => {
                self.connections = Some(connections);
            }
        }

        self.status.insert(kind, DataStatus::Ready);
        self.writes += 1;
        debug!("Applied {} update (write #{})", kind, self.writes);
        Ok(())
    }

    fn record_counter(&mut self, sample: Sample) {
        if let PushOutcome::OutOfOrder = self.packet_history.push(sample) {
            warn!(
                "Dropping out-of-order total_packets sample ({})",
                sample.value
            );
            return;
        }

        if let Some(rate) = self.rate.derive(sample) {
            self.rate_history.push(rate);
        }
    }

    /// Flag `kind` as failed; the previous value stays readable
    pub fn record_error(&mut self, kind: MetricKind, reason: impl Into<String>) {
        let reason = reason.into();
        debug!("Marking {} as failed: {}", kind, reason);
        self.status.insert(kind, DataStatus::Error(reason));
        self.writes += 1;
    }

    /// Keep the server-computed rate alongside the derived one
    pub fn record_reported_rate(&mut self, rate: f64) -> Result<()> {
        if !rate.is_finite() {
            return Err(MonitorError::Parsing(format!(
                "traffic_rate is not a finite number: {}",
                rate
            )));
        }
        self.reported_rate = Some(rate);
        self.writes += 1;
        Ok(())
    }

    pub fn total_packets(&self) -> Option<u64> {
        self.total_packets
    }

    pub fn protocol_counts(&self) -> Option<&[ProtocolCount]> {
        self.protocol_counts.as_deref()
    }

    pub fn connections(&self) -> Option<&[Connection]> {
        self.connections.as_deref()
    }

    pub fn status(&self, kind: MetricKind) -> &DataStatus {
        self.status.get(&kind).unwrap_or(&EMPTY_STATUS)
    }

    pub fn packet_history(&self) -> &TimeSeriesBuffer {
        &self.packet_history
    }

    pub fn rate_history(&self) -> &TimeSeriesBuffer {
        &self.rate_history
    }

    pub fn reported_rate(&self) -> Option<f64> {
        self.reported_rate
    }

    /// Latest value of `kind`, regardless of its status
    pub fn value(&self, kind: MetricKind) -> Option<MetricValue<'_>> {
        match kind {
            MetricKind::TotalPackets => self.total_packets.map(MetricValue::TotalPackets),
            MetricKind::ProtocolCounts => self
                .protocol_counts
                .as_deref()
                .map(MetricValue::ProtocolCounts),
            MetricKind::Connections => self.connections.as_deref().map(MetricValue::Connections),
        }
    }

    /// Everything a presenter needs to redraw `kind`
    pub fn view(&self, kind: MetricKind) -> StoreUpdate<'_> {
        let counter = kind.is_counter();
        StoreUpdate {
            kind,
            value: self.value(kind),
            status: self.status(kind),
            history: counter.then_some(&self.packet_history),
            rate_history: counter.then_some(&self.rate_history),
            reported_rate: if counter { self.reported_rate } else { None },
        }
    }

    /// Number of writes applied so far
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl Default for MetricStore {
    fn default() -> Self {
        Self::new(&HistoryConfig::default())
    }
}

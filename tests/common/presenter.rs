//! Recording presenter
//!
//! Streams an owned copy of every notification back to the test so it can be
//! awaited while the client loop runs.

use netmon_live::client::ConnectionState;
use netmon_live::core::types::MetricKind;
use netmon_live::monitoring::{DataStatus, MetricValue, StoreUpdate};
use netmon_live::presentation::PresentationAdapter;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Owned snapshot of one presenter call
#[derive(Debug, Clone, PartialEq)]
pub enum Observation {
    Update {
        kind: MetricKind,
        status: DataStatus,
        total_packets: Option<u64>,
        /// Rows in a table-shaped value
        rows: Option<usize>,
        history_len: usize,
        latest_rate: Option<f64>,
        reported_rate: Option<f64>,
    },
    State(ConnectionState),
}

impl Observation {
    pub fn is_update_of(&self, wanted: MetricKind) -> bool {
        matches!(self, Observation::Update { kind, .. } if *kind == wanted)
    }

    pub fn is_ready_update_of(&self, wanted: MetricKind) -> bool {
        matches!(
            self,
            Observation::Update { kind, status: DataStatus::Ready, .. } if *kind == wanted
        )
    }

    pub fn is_error_update_of(&self, wanted: MetricKind) -> bool {
        matches!(
            self,
            Observation::Update { kind, status: DataStatus::Error(_), .. } if *kind == wanted
        )
    }
}

pub struct RecordingPresenter {
    tx: UnboundedSender<Observation>,
}

impl RecordingPresenter {
    pub fn new() -> (Self, Observations) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, Observations { rx })
    }
}

impl PresentationAdapter for RecordingPresenter {
    fn on_update(&mut self, update: &StoreUpdate<'_>) {
        let (total_packets, rows) = match update.value {
            Some(MetricValue::TotalPackets(total)) => (Some(total), None),
            Some(MetricValue::ProtocolCounts(counts)) => (None, Some(counts.len())),
            Some(MetricValue::Connections(connections)) => (None, Some(connections.len())),
            None => (None, None),
        };

        let _ = self.tx.send(Observation::Update {
            kind: update.kind,
            status: update.status.clone(),
            total_packets,
            rows,
            history_len: update.history.map(|h| h.len()).unwrap_or(0),
            latest_rate: update.latest_rate(),
            reported_rate: update.reported_rate,
        });
    }

    fn on_connection_state(&mut self, state: ConnectionState) {
        let _ = self.tx.send(Observation::State(state));
    }
}

/// Receiving side of a [`RecordingPresenter`]
pub struct Observations {
    rx: UnboundedReceiver<Observation>,
}

impl Observations {
    /// Next observation, failing the test after five seconds
    pub async fn next(&mut self) -> Observation {
        tokio::time::timeout(Duration::from_secs(5), self.rx.recv())
            .await
            .expect("timed out waiting for presenter notification")
            .expect("presenter dropped")
    }

    /// Skip observations until one matches
    pub async fn wait_for<F>(&mut self, mut predicate: F) -> Observation
    where
        F: FnMut(&Observation) -> bool,
    {
        loop {
            let observation = self.next().await;
            if predicate(&observation) {
                return observation;
            }
        }
    }

    pub async fn wait_for_state(&mut self, state: ConnectionState) {
        self.wait_for(|o| *o == Observation::State(state)).await;
    }

    /// Wait until every matcher has seen a matching observation, in any order
    pub async fn wait_for_all(&mut self, mut pending: Vec<Matcher>) {
        while !pending.is_empty() {
            let observation = self.next().await;
            pending.retain(|matches| !matches(&observation));
        }
    }
}

/// Predicate used with [`Observations::wait_for_all`]
pub type Matcher = Box<dyn Fn(&Observation) -> bool + Send>;

pub fn ready(kind: MetricKind) -> Matcher {
    Box::new(move |o| o.is_ready_update_of(kind))
}

pub fn failed(kind: MetricKind) -> Matcher {
    Box::new(move |o| o.is_error_update_of(kind))
}

pub fn state(wanted: ConnectionState) -> Matcher {
    Box::new(move |o| *o == Observation::State(wanted))
}

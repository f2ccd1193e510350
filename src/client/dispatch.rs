//! Push message routing
//!
//! Maps a message's `type` tag to the handler that decodes its `data` and
//! writes it into the store. Unknown tags and malformed frames are logged and
//! dropped; the channel stays up either way.

use crate::core::types::{MetricKind, PushMessage, SnapshotPayload, TRAFFIC_RATE_TAG, TrafficRate};
use crate::monitoring::MetricStore;
use crate::utils::error::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, warn};

/// What a dispatched message did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The view of this kind changed
    Applied(MetricKind),
    /// The payload was invalid; this kind is now flagged as failed
    Rejected(MetricKind),
    /// Nothing changed
    Ignored,
}

impl DispatchOutcome {
    /// Kind whose view should be redrawn
    pub fn touched(&self) -> Option<MetricKind> {
        match self {
            DispatchOutcome::Applied(kind) | DispatchOutcome::Rejected(kind) => Some(*kind),
            DispatchOutcome::Ignored => None,
        }
    }
}

/// Decodes the `data` of one message type into the store
pub trait UpdateHandler: Send + Sync {
    /// Kind whose view changes when this handler runs
    fn kind(&self) -> MetricKind;

    /// Whether a bad payload marks [`kind`](Self::kind) as failed
    fn flags_errors(&self) -> bool {
        true
    }

    fn handle(&self, store: &mut MetricStore, data: &Value, at: Instant) -> Result<()>;
}

/// Applies a full snapshot of one kind
#[derive(Debug, Clone, Copy)]
pub struct SnapshotHandler {
    kind: MetricKind,
}

impl SnapshotHandler {
    pub fn new(kind: MetricKind) -> Self {
        Self { kind }
    }
}

impl UpdateHandler for SnapshotHandler {
    fn kind(&self) -> MetricKind {
        self.kind
    }

    fn handle(&self, store: &mut MetricStore, data: &Value, at: Instant) -> Result<()> {
        let payload = SnapshotPayload::decode(self.kind, data)?;
        store.apply_at(self.kind, payload, at)
    }
}

/// Records the rate the server computed itself
#[derive(Debug, Clone, Copy, Default)]
pub struct TrafficRateHandler;

impl UpdateHandler for TrafficRateHandler {
    fn kind(&self) -> MetricKind {
        MetricKind::TotalPackets
    }

    // A bad server rate says nothing about the packet counter
    fn flags_errors(&self) -> bool {
        false
    }

    fn handle(&self, store: &mut MetricStore, data: &Value, _at: Instant) -> Result<()> {
        let rate: TrafficRate = serde_json::from_value(data.clone())?;
        store.record_reported_rate(rate.traffic_rate)
    }
}

/// Routes push messages to their handlers
pub struct Dispatcher {
    handlers: HashMap<String, Box<dyn UpdateHandler>>,
}

impl Dispatcher {
    /// A dispatcher with no handlers
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// A dispatcher handling every metric kind plus `traffic_rate`
    pub fn new() -> Self {
        let mut dispatcher = Self::empty();
        for kind in MetricKind::ALL {
            dispatcher.register(kind.as_str(), Box::new(SnapshotHandler::new(kind)));
        }
        dispatcher.register(TRAFFIC_RATE_TAG, Box::new(TrafficRateHandler));
        dispatcher
    }

    /// Register a handler, returning the one it replaces
    pub fn register(
        &mut self,
        tag: impl Into<String>,
        handler: Box<dyn UpdateHandler>,
    ) -> Option<Box<dyn UpdateHandler>> {
        self.handlers.insert(tag.into(), handler)
    }

    pub fn handles(&self, tag: &str) -> bool {
        self.handlers.contains_key(tag)
    }

    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    pub fn dispatch(&self, store: &mut MetricStore, raw: &str) -> DispatchOutcome {
        self.dispatch_at(store, raw, Instant::now())
    }

    /// Route one raw frame received at `at`
    pub fn dispatch_at(&self, store: &mut MetricStore, raw: &str, at: Instant) -> DispatchOutcome {
        let message = match PushMessage::parse(raw) {
            Ok(message) => message,
            Err(e) => {
                warn!("Discarding malformed push message: {}", e);
                return DispatchOutcome::Ignored;
            }
        };

        let Some(handler) = self.handlers.get(&message.event_type) else {
            warn!("Discarding push message with unknown type '{}'", message.event_type);
            return DispatchOutcome::Ignored;
        };

        let kind = handler.kind();
        match handler.handle(store, &message.data, at) {
            Ok(()) => {
                debug!("Applied pushed '{}' update", message.event_type);
                DispatchOutcome::Applied(kind)
            }
            Err(e) if handler.flags_errors() => {
                warn!("Invalid '{}' push payload: {}", message.event_type, e);
                store.record_error(kind, e.to_string());
                DispatchOutcome::Rejected(kind)
            }
            Err(e) => {
                warn!("Discarding invalid '{}' push payload: {}", message.event_type, e);
                DispatchOutcome::Ignored
            }
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("tags", &self.tags())
            .finish()
    }
}

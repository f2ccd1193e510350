//! Events consumed by the client event loop

use super::channel::ChannelEvent;
use crate::core::types::{MetricKind, SnapshotPayload};
use crate::utils::error::Result;

/// Everything that can wake the event loop
///
/// Spawned tasks never touch the store; they report back through this type.
#[derive(Debug)]
pub enum LoopEvent {
    /// A pull request finished
    Snapshot {
        kind: MetricKind,
        result: Result<SnapshotPayload>,
    },
    /// Push channel activity
    Channel(ChannelEvent),
    /// Fetch one kind, or every kind when `None`
    Refresh(Option<MetricKind>),
    Shutdown,
}

impl From<ChannelEvent> for LoopEvent {
    fn from(event: ChannelEvent) -> Self {
        LoopEvent::Channel(event)
    }
}

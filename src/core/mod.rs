//! Core data structures
//!
//! This module contains the metric kinds and wire types shared by every component.

pub mod types;

pub use types::{MetricKind, SnapshotPayload};

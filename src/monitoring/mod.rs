//! Client-side metric state
//!
//! Holds what the presentation layer reads: latest values, per-kind load
//! status, and the sliding windows kept for the packet counter.

pub mod metrics;

pub use metrics::{
    DataStatus, MetricStore, MetricValue, RateDerivator, Sample, StoreUpdate, TimeSeriesBuffer,
};

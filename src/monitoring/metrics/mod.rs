//! Metric storage, history windows and rate derivation
//!
//! The store is the only writer-facing type here; buffers and the derivator
//! are exposed for presenters and tests that want to work with them directly.

mod bounded;
mod rate;
mod store;
mod types;


pub use bounded::{PushOutcome, Sample, TimeSeriesBuffer};
pub use rate::{RateDerivator, rate_between};
pub use store::MetricStore;
pub use types::{DataStatus, MetricValue, StoreUpdate};

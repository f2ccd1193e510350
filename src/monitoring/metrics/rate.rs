//! Rate derivation from a cumulative counter

use super::bounded::Sample;
use tracing::warn;

/// Per-second rate between two counter samples
///
/// Returns `None` when the samples share a timestamp or arrive reversed.
/// Negative differences (counter resets) are returned as-is.
pub fn rate_between(previous: &Sample, current: &Sample) -> Option<f64> {
    let elapsed = current
        .timestamp
        .checked_duration_since(previous.timestamp)?
        .as_secs_f64();

    if elapsed <= 0.0 {
        return None;
    }

    Some((current.value - previous.value) / elapsed)
}

/// Turns consecutive counter samples into rate samples
#[derive(Debug, Default)]
pub struct RateDerivator {
    previous: Option<Sample>,
    skipped: u64,
}

impl RateDerivator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next accepted counter sample
    ///
    /// Emits nothing for the first observation. A sample with the same
    /// timestamp as its predecessor emits nothing but still becomes the
    /// predecessor of the next one.
    pub fn derive(&mut self, sample: Sample) -> Option<Sample> {
        let Some(previous) = self.previous else {
            self.previous = Some(sample);
            return None;
        };

        if sample.timestamp < previous.timestamp {
            warn!(
                "Counter sample arrived {:?} before its predecessor; keeping the newer one",
                previous.timestamp - sample.timestamp
            );
            self.skipped += 1;
            return None;
        }

        self.previous = Some(sample);

        match rate_between(&previous, &sample) {
            Some(rate) => Some(Sample {
                timestamp: sample.timestamp,
                captured_at: sample.captured_at,
                value: rate,
            }),
            None => {
                warn!(
                    "Duplicate counter timestamp (values {} -> {}); no rate emitted",
                    previous.value, sample.value
                );
                self.skipped += 1;
                None
            }
        }
    }

    /// Last accepted counter sample
    pub fn previous(&self) -> Option<&Sample> {
        self.previous.as_ref()
    }

    /// Samples that produced no rate because of timestamp anomalies
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn reset(&mut self) {
        self.previous = None;
    }
}

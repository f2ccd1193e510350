//! Bounded collection utilities for metrics

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Helper trait for bounded VecDeque operations
pub(super) trait BoundedPush<T> {
    fn push_bounded(&mut self, value: T, max_size: usize) -> Option<T>;
}

impl<T> BoundedPush<T> for VecDeque<T> {
    /// Push a value while maintaining a maximum size (O(1) amortized)
    ///
    /// Returns the evicted front element, if any.
    #[inline]
    fn push_bounded(&mut self, value: T, max_size: usize) -> Option<T> {
        let evicted = if self.len() >= max_size {
            self.pop_front()
        } else {
            None
        };
        self.push_back(value);
        evicted
    }
}

/// One timestamped observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Monotonic instant used for ordering and rate arithmetic
    pub timestamp: Instant,
    /// Wall-clock time for display
    pub captured_at: DateTime<Utc>,
    pub value: f64,
}

impl Sample {
    /// `captured_at` is the wall-clock time corresponding to `timestamp`
    pub fn new(timestamp: Instant, value: f64) -> Self {
        Self {
            timestamp,
            captured_at: wall_clock_at(timestamp),
            value,
        }
    }

    pub fn now(value: f64) -> Self {
        Self::new(Instant::now(), value)
    }
}

/// Map a monotonic instant onto the wall clock, relative to now
fn wall_clock_at(instant: Instant) -> DateTime<Utc> {
    let now = Utc::now();
    let reference = Instant::now();

    let shifted = match reference.checked_duration_since(instant) {
        Some(ago) => chrono::Duration::from_std(ago)
            .ok()
            .and_then(|ago| now.checked_sub_signed(ago)),
        None => chrono::Duration::from_std(instant.duration_since(reference))
            .ok()
            .and_then(|ahead| now.checked_add_signed(ahead)),
    };
    shifted.unwrap_or(now)
}

/// Result of appending to a [`TimeSeriesBuffer`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PushOutcome {
    Appended,
    /// Appended, and the oldest sample fell out of the window
    Evicted(Sample),
    /// Rejected because it is older than the newest buffered sample
    OutOfOrder,
}

impl PushOutcome {
    pub fn accepted(&self) -> bool {
        !matches!(self, PushOutcome::OutOfOrder)
    }
}

/// Fixed-capacity FIFO window of samples ordered by timestamp
#[derive(Debug, Clone)]
pub struct TimeSeriesBuffer {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl TimeSeriesBuffer {
    /// Create an empty window; a zero capacity is raised to one
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest one past capacity
    pub fn push(&mut self, sample: Sample) -> PushOutcome {
        if let Some(latest) = self.samples.back() {
            if sample.timestamp < latest.timestamp {
                return PushOutcome::OutOfOrder;
            }
        }

        match self.samples.push_bounded(sample, self.capacity) {
            Some(evicted) => PushOutcome::Evicted(evicted),
            None => PushOutcome::Appended,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    pub fn oldest(&self) -> Option<&Sample> {
        self.samples.front()
    }

    /// Samples from oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Sample> + ExactSizeIterator {
        self.samples.iter()
    }

    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.value).collect()
    }

    /// Time covered by the window
    pub fn span(&self) -> Option<Duration> {
        let (first, last) = (self.samples.front()?, self.samples.back()?);
        Some(last.timestamp.saturating_duration_since(first.timestamp))
    }

    /// Smallest and largest value in the window
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut values = self.samples.iter().map(|s| s.value).filter(|v| v.is_finite());
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl Default for TimeSeriesBuffer {
    fn default() -> Self {
        Self::new(crate::config::default_history_capacity())
    }
}

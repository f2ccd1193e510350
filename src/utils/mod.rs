//! Utility modules for the live client
//!
//! - **error**: Error type and classification
//! - **logging**: Subscriber setup

pub mod error; // Error handling
pub mod logging; // Logging

// Re-export commonly used types from each module for convenience
pub use error::{ErrorCategory, MonitorError, Result};
pub use logging::{LogFormat, LogLevel, LoggingUtils};

/// Format duration as human readable string
pub fn format_duration(duration_ms: u64) -> String {
    if duration_ms < 1000 {
        format!("{}ms", duration_ms)
    } else if duration_ms < 60_000 {
        format!("{:.1}s", duration_ms as f64 / 1000.0)
    } else if duration_ms < 3_600_000 {
        format!("{:.1}m", duration_ms as f64 / 60_000.0)
    } else {
        format!("{:.1}h", duration_ms as f64 / 3_600_000.0)
    }
}

/// Format a count with thousands separators
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a per-second rate
pub fn format_rate(rate: f64) -> String {
    if !rate.is_finite() {
        return "n/a".to_string();
    }
    if rate.abs() >= 1_000_000.0 {
        format!("{:.2}M/s", rate / 1_000_000.0)
    } else if rate.abs() >= 1_000.0 {
        format!("{:.2}k/s", rate / 1_000.0)
    } else {
        format!("{:.1}/s", rate)
    }
}

/// Truncate string to specified length with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

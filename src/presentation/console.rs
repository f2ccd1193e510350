//! Log-line presenter

use super::PresentationAdapter;
use crate::client::ConnectionState;
use crate::config::DisplayConfig;
use crate::core::types::{Connection, ProtocolCount};
use crate::monitoring::{DataStatus, MetricValue, StoreUpdate};
use crate::utils::{format_count, format_duration, format_rate, truncate_string};
use tracing::{info, warn};

/// Shown in place of a value whose last load failed
pub const ERROR_PLACEHOLDER: &str = "Error loading data";

/// Renders each update as log lines
#[derive(Debug, Clone, Default)]
pub struct LogPresenter {
    display: DisplayConfig,
    updates: u64,
}

impl LogPresenter {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display, updates: 0 }
    }

    /// Updates rendered so far
    pub fn updates(&self) -> u64 {
        self.updates
    }
}

impl PresentationAdapter for LogPresenter {
    fn on_update(&mut self, update: &StoreUpdate<'_>) {
        self.updates += 1;
        let error = update.is_error();
        for line in render_lines(update, &self.display) {
            if error {
                warn!("{}", line);
            } else {
                info!("{}", line);
            }
        }
    }

    fn on_connection_state(&mut self, state: ConnectionState) {
        info!("Live updates {}", state);
    }
}

/// Text lines for one update
pub fn render_lines(update: &StoreUpdate<'_>, display: &DisplayConfig) -> Vec<String> {
    let title = update.kind.display_name();

    if let DataStatus::Error(reason) = update.status {
        return vec![format!("{}: {} ({})", title, ERROR_PLACEHOLDER, reason)];
    }

    match update.value {
        None => vec![format!("{}: waiting for data", title)],
        Some(MetricValue::TotalPackets(total)) => vec![render_counter(title, total, update)],
        Some(MetricValue::ProtocolCounts(counts)) => render_protocols(title, counts, display),
        Some(MetricValue::Connections(connections)) => {
            render_connections(title, connections, display)
        }
    }
}

fn render_counter(title: &str, total: u64, update: &StoreUpdate<'_>) -> String {
    let mut line = format!(
        "{}: {} | rate {}",
        title,
        format_count(total),
        update
            .latest_rate()
            .map(format_rate)
            .unwrap_or_else(|| "n/a".to_string())
    );

    if let Some(reported) = update.reported_rate {
        line.push_str(&format!(" (server {})", format_rate(reported)));
    }

    if let Some(history) = update.history {
        if let Some(span) = history.span() {
            line.push_str(&format!(
                " | {} samples over {}",
                history.len(),
                format_duration(span.as_millis() as u64)
            ));
        }
    }

    line
}

fn render_protocols(title: &str, counts: &[ProtocolCount], display: &DisplayConfig) -> Vec<String> {
    if counts.is_empty() {
        return vec![format!("{}: none observed", title)];
    }

    let width = counts
        .iter()
        .map(|c| c.protocol.chars().count())
        .max()
        .unwrap_or(0)
        .min(display.max_label_width);

    let mut lines = Vec::with_capacity(counts.len() + 1);
    lines.push(format!("{}: {} protocols", title, counts.len()));
    for count in counts {
        lines.push(format!(
            "  {:<width$}  {:>12}",
            truncate_string(&count.protocol, display.max_label_width),
            format_count(count.packet_count),
            width = width
        ));
    }
    lines
}

fn render_connections(
    title: &str,
    connections: &[Connection],
    display: &DisplayConfig,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(connections.len().min(display.max_connection_rows) + 2);
    lines.push(format!("{}: {} observed", title, format_count(connections.len() as u64)));

    for connection in connections.iter().take(display.max_connection_rows) {
        lines.push(format!(
            "  {:<5} {}:{} ({}) -> {}:{} ({})",
            connection.protocol,
            connection.source_ip,
            connection.source_port,
            truncate_string(&connection.source_domain, display.max_label_width),
            connection.destination_ip,
            connection.destination_port,
            truncate_string(&connection.destination_domain, display.max_label_width),
        ));
    }

    let hidden = connections.len().saturating_sub(display.max_connection_rows);
    if hidden > 0 {
        lines.push(format!("  ... and {} more", format_count(hidden as u64)));
    }
    lines
}

use super::types::{LogFormat, LogLevel};
use crate::config::LoggingConfig;
use crate::utils::error::{MonitorError, Result};
use tracing_subscriber::EnvFilter;

pub struct LoggingUtils;

impl LoggingUtils {
    /// Build the filter, letting `RUST_LOG` override the configured level
    pub fn build_filter(level: LogLevel) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_directive()))
    }

    pub fn init_logger(config: &LoggingConfig) -> Result<()> {
        let filter = Self::build_filter(config.level);

        let result = match config.format {
            LogFormat::Pretty => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_thread_ids(false)
                .try_init(),
            LogFormat::Json => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_current_span(false)
                .try_init(),
        };

        result.map_err(|e| MonitorError::Config(format!("Failed to initialize logging: {}", e)))
    }
}

//! Logging setup
//!
//! Installs the global `tracing` subscriber used by the binary.

pub mod types;
pub mod utils;

pub use types::{LogFormat, LogLevel};
pub use utils::LoggingUtils;

use crate::config::LoggingConfig;
use crate::utils::error::Result;

/// Initialize the global subscriber from configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    LoggingUtils::init_logger(config)
}

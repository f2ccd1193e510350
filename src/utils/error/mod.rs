//! Error Handling utilities
//!
//! This module provides the client error type and its classification.

pub mod error;
pub mod utils;

// Re-export commonly used types
pub use error::*;
pub use utils::ErrorCategory;

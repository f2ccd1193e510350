//! Validation trait definition
//!
//! This module defines the Validate trait implemented by every configuration section.

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;

    /// Validate, prefixing any error with the section name as written in YAML
    fn validate_section(&self, section: &str) -> Result<(), String> {
        self.validate().map_err(|e| format!("{}: {}", section, e))
    }
}

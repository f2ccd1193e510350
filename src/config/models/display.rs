//! Console presenter configuration

use super::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Connection rows printed per update
    #[serde(default = "default_max_connection_rows")]
    pub max_connection_rows: usize,
    /// Domains and labels longer than this are truncated
    #[serde(default = "default_max_label_width")]
    pub max_label_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_connection_rows: default_max_connection_rows(),
            max_label_width: default_max_label_width(),
        }
    }
}

impl DisplayConfig {
    pub fn merge(mut self, other: Self) -> Self {
        if other.max_connection_rows != default_max_connection_rows() {
            self.max_connection_rows = other.max_connection_rows;
        }
        if other.max_label_width != default_max_label_width() {
            self.max_label_width = other.max_label_width;
        }
        self
    }
}

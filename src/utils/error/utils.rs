use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Transport, // network failures, retried by the next poll or reconnect
    Decode,    // payload shape problems, surfaced as an error indicator
    Config,    // fatal at startup only
    Internal,
}

impl ErrorCategory {
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ErrorCategory::Transport | ErrorCategory::Decode)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Decode => "decode",
            ErrorCategory::Config => "config",
            ErrorCategory::Internal => "internal",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

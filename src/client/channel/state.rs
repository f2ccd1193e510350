//! Push channel state and events

use std::fmt;

/// Lifecycle of the push connection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

impl ConnectionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionState::Disconnected => "disconnected",
            ConnectionState::Connecting => "connecting",
            ConnectionState::Connected => "connected",
        }
    }

    /// Whether a connection attempt is in flight or established
    pub fn is_active(&self) -> bool {
        !matches!(self, ConnectionState::Disconnected)
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that happened to the push connection
///
/// Connection events carry the generation of the attempt that produced them;
/// events from superseded attempts are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelEvent {
    Opened { generation: u64 },
    Message { generation: u64, text: String },
    Closed { generation: u64 },
    Failed { generation: u64, error: String },
    /// The reconnect delay elapsed
    RetryDue,
}

impl ChannelEvent {
    pub fn generation(&self) -> Option<u64> {
        match self {
            ChannelEvent::Opened { generation }
            | ChannelEvent::Message { generation, .. }
            | ChannelEvent::Closed { generation }
            | ChannelEvent::Failed { generation, .. } => Some(*generation),
            ChannelEvent::RetryDue => None,
        }
    }
}

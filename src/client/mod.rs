//! Live synchronisation with the monitor
//!
//! - **snapshot**: pull API client
//! - **channel**: push channel with fixed-delay reconnect
//! - **dispatch**: push message routing into the store
//! - **runtime**: the event loop tying them together

pub mod channel;
pub mod dispatch;
pub mod event;
pub mod runtime;
pub mod snapshot;

pub use channel::{ChannelEvent, ConnectionState, Connector, MessageStream, PushChannel, WsConnector};
pub use dispatch::{DispatchOutcome, Dispatcher, SnapshotHandler, TrafficRateHandler, UpdateHandler};
pub use event::LoopEvent;
pub use runtime::{ClientHandle, LiveClient};
pub use snapshot::SnapshotFetcher;

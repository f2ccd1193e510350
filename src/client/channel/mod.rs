//! Server push channel

mod channel;
mod connector;
mod state;


pub use channel::PushChannel;
pub use connector::{Connector, MessageStream, WsConnector};
pub use state::{ChannelEvent, ConnectionState};

//! Transport behind the push channel

use crate::utils::error::{MonitorError, Result};
use async_trait::async_trait;
use futures::{Stream, StreamExt};
use std::pin::Pin;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, warn};
use url::Url;

/// Text frames received from the server, in order
///
/// The stream ends when the peer closes the connection. An `Err` item is a
/// transport failure and is always the last item.
pub type MessageStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// Opens the push connection
#[async_trait]
pub trait Connector: Send + Sync + 'static {
    async fn connect(&self, url: &Url) -> Result<MessageStream>;
}

/// WebSocket connector
#[derive(Debug, Clone, Copy, Default)]
pub struct WsConnector;

#[async_trait]
impl Connector for WsConnector {
    async fn connect(&self, url: &Url) -> Result<MessageStream> {
        let (mut socket, response) = connect_async(url.as_str())
            .await
            .map_err(|e| MonitorError::Transport(format!("WebSocket connect failed: {}", e)))?;
        debug!("WebSocket handshake completed with status {}", response.status());

        let stream = async_stream::stream! {
            while let Some(frame) = socket.next().await {
                match frame {
                    Ok(Message::Text(text)) => yield Ok(text),
                    Ok(Message::Binary(bytes)) => match String::from_utf8(bytes) {
                        Ok(text) => yield Ok(text),
                        Err(e) => warn!("Dropping non UTF-8 binary frame: {}", e),
                    },
                    Ok(Message::Close(frame)) => {
                        debug!("WebSocket closed by peer: {:?}", frame);
                        break;
                    }
                    // Ping/pong are answered by tungstenite
                    Ok(_) => continue,
                    Err(e) => {
                        yield Err(MonitorError::Transport(e.to_string()));
                        break;
                    }
                }
            }
        };

        Ok(Box::pin(stream))
    }
}

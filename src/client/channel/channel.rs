//! Push channel with fixed-delay reconnection

use super::connector::Connector;
use super::state::{ChannelEvent, ConnectionState};
use crate::client::event::LoopEvent;
use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use url::Url;

/// Long-lived server push connection
///
/// Owned by the event loop. Connection work happens in a spawned reader task
/// that reports [`ChannelEvent`]s back; state only changes in [`handle`].
/// After any close or failure exactly one reconnect is scheduled, after a
/// fixed delay.
///
/// [`handle`]: PushChannel::handle
pub struct PushChannel {
    url: Url,
    reconnect_delay: Duration,
    connector: Arc<dyn Connector>,
    events: UnboundedSender<LoopEvent>,
    state: ConnectionState,
    generation: u64,
    reader: Option<JoinHandle<()>>,
    retry: Option<JoinHandle<()>>,
    reconnects_scheduled: u64,
    closed: bool,
}

impl PushChannel {
    pub fn new(
        url: Url,
        reconnect_delay: Duration,
        connector: Arc<dyn Connector>,
        events: UnboundedSender<LoopEvent>,
    ) -> Self {
        Self {
            url,
            reconnect_delay,
            connector,
            events,
            state: ConnectionState::Disconnected,
            generation: 0,
            reader: None,
            retry: None,
            reconnects_scheduled: 0,
            closed: false,
        }
    }

    /// Start a connection attempt
    ///
    /// Returns `false` without doing anything when an attempt is already in
    /// flight or established, or after [`shutdown`](Self::shutdown). Cancels
    /// a pending reconnect timer.
    pub fn connect(&mut self) -> bool {
        if self.closed {
            debug!("Push channel is shut down; not connecting");
            return false;
        }
        if self.state.is_active() {
            debug!("Push channel already {}; connect ignored", self.state);
            return false;
        }

        self.cancel_retry();
        self.generation += 1;
        self.state = ConnectionState::Connecting;
        info!("Connecting push channel to {} (attempt #{})", self.url, self.generation);

        let generation = self.generation;
        let url = self.url.clone();
        let connector = Arc::clone(&self.connector);
        let events = self.events.clone();

        self.reader = Some(tokio::spawn(async move {
            let mut stream = match connector.connect(&url).await {
                Ok(stream) => stream,
                Err(e) => {
                    let _ = events.send(
                        ChannelEvent::Failed {
                            generation,
                            error: e.to_string(),
                        }
                        .into(),
                    );
                    return;
                }
            };

            if events.send(ChannelEvent::Opened { generation }.into()).is_err() {
                return;
            }

            while let Some(item) = stream.next().await {
                let event = match item {
                    Ok(text) => ChannelEvent::Message { generation, text },
                    Err(e) => {
                        let _ = events.send(
                            ChannelEvent::Failed {
                                generation,
                                error: e.to_string(),
                            }
                            .into(),
                        );
                        return;
                    }
                };
                if events.send(event.into()).is_err() {
                    return;
                }
            }

            let _ = events.send(ChannelEvent::Closed { generation }.into());
        }));

        true
    }

    /// Apply a channel event
    ///
    /// Returns the message text for events that carry an update to dispatch.
    pub fn handle(&mut self, event: ChannelEvent) -> Option<String> {
        if let Some(generation) = event.generation() {
            if generation != self.generation || self.closed {
                debug!(
                    "Ignoring event from superseded push attempt #{} (current #{})",
                    generation, self.generation
                );
                return None;
            }
        }

        match event {
            ChannelEvent::Opened { .. } => {
                if self.state == ConnectionState::Connecting {
                    self.state = ConnectionState::Connected;
                    info!("Push channel connected to {}", self.url);
                }
                None
            }
            ChannelEvent::Message { text, .. } => {
                if self.state == ConnectionState::Connected {
                    Some(text)
                } else {
                    debug!("Dropping push message received while {}", self.state);
                    None
                }
            }
            ChannelEvent::Closed { .. } => {
                self.on_disconnect("closed by server");
                None
            }
            ChannelEvent::Failed { error, .. } => {
                self.on_disconnect(&error);
                None
            }
            ChannelEvent::RetryDue => {
                if self.retry.take().is_some() {
                    info!("Reconnect delay elapsed; reconnecting push channel");
                    self.connect();
                } else {
                    debug!("Ignoring cancelled reconnect timer");
                }
                None
            }
        }
    }

    fn on_disconnect(&mut self, reason: &str) {
        if !self.state.is_active() {
            return;
        }
        warn!("Push channel to {} lost: {}", self.url, reason);
        self.state = ConnectionState::Disconnected;
        self.reader = None;
        self.schedule_retry();
    }

    fn schedule_retry(&mut self) {
        if self.closed || self.retry.is_some() {
            return;
        }

        let delay = self.reconnect_delay;
        let events = self.events.clone();
        self.reconnects_scheduled += 1;
        info!("Reconnecting push channel in {}ms", delay.as_millis());

        self.retry = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(ChannelEvent::RetryDue.into());
        }));
    }

    fn cancel_retry(&mut self) {
        if let Some(timer) = self.retry.take() {
            timer.abort();
        }
    }

    /// Stop the connection and any pending reconnect; further connects are refused
    pub fn shutdown(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.cancel_retry();
        if let Some(reader) = self.reader.take() {
            reader.abort();
        }
        self.state = ConnectionState::Disconnected;
        info!("Push channel shut down");
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn reconnect_delay(&self) -> Duration {
        self.reconnect_delay
    }

    /// Number of connection attempts started
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn retry_pending(&self) -> bool {
        self.retry.is_some()
    }

    /// Number of reconnect timers started so far
    pub fn reconnects_scheduled(&self) -> u64 {
        self.reconnects_scheduled
    }

    pub fn is_shut_down(&self) -> bool {
        self.closed
    }
}

impl Drop for PushChannel {
    fn drop(&mut self) {
        self.cancel_retry();
        if let Some(reader) = self.reader.take() {
            reader.abort();
        }
    }
}

impl std::fmt::Debug for PushChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushChannel")
            .field("url", &self.url.as_str())
            .field("state", &self.state)
            .field("generation", &self.generation)
            .field("retry_pending", &self.retry.is_some())
            .finish()
    }
}

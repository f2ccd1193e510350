//! Live client event loop
//!
//! [`LiveClient::run`] owns the store, the push channel and the presenter.
//! Fetches, the poller, the WebSocket reader and the reconnect timer run as
//! spawned tasks that only send [`LoopEvent`]s back; each event is applied to
//! the store and the presenter is notified before the next one is taken.

use super::channel::{ConnectionState, Connector, PushChannel, WsConnector};
use super::dispatch::Dispatcher;
use super::event::LoopEvent;
use super::snapshot::SnapshotFetcher;
use crate::config::{ClientConfig, Validate};
use crate::core::types::{MetricKind, SnapshotPayload};
use crate::monitoring::MetricStore;
use crate::presentation::PresentationAdapter;
use crate::utils::error::{MonitorError, Result};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Cloneable handle for driving a running client from other tasks
#[derive(Debug, Clone)]
pub struct ClientHandle {
    events: UnboundedSender<LoopEvent>,
}

impl ClientHandle {
    /// Request an on-demand snapshot of one kind
    pub fn refresh(&self, kind: MetricKind) -> Result<()> {
        self.send(LoopEvent::Refresh(Some(kind)))
    }

    /// Request a snapshot of every kind
    pub fn refresh_all(&self) -> Result<()> {
        self.send(LoopEvent::Refresh(None))
    }

    /// Stop the event loop; `run` returns once the request is processed
    pub fn shutdown(&self) -> Result<()> {
        self.send(LoopEvent::Shutdown)
    }

    fn send(&self, event: LoopEvent) -> Result<()> {
        self.events.send(event).map_err(|_| MonitorError::LoopClosed)
    }
}

/// Keeps the metric store in sync with the monitor
pub struct LiveClient<P: PresentationAdapter> {
    config: ClientConfig,
    fetcher: SnapshotFetcher,
    channel: Option<PushChannel>,
    dispatcher: Dispatcher,
    store: MetricStore,
    presenter: P,
    events_tx: UnboundedSender<LoopEvent>,
    events_rx: UnboundedReceiver<LoopEvent>,
    in_flight: HashSet<MetricKind>,
    poller: Option<JoinHandle<()>>,
}

impl<P: PresentationAdapter> LiveClient<P> {
    /// Create a client using the WebSocket transport
    pub fn new(config: ClientConfig, presenter: P) -> Result<Self> {
        Self::with_connector(config, presenter, Arc::new(WsConnector))
    }

    /// Create a client with a custom push transport
    ///
    /// Fails with [`MonitorError::Config`] when `config` does not validate.
    pub fn with_connector(
        config: ClientConfig,
        presenter: P,
        connector: Arc<dyn Connector>,
    ) -> Result<Self> {
        config
            .validate()
            .map_err(|e| MonitorError::Config(format!("Client config error: {}", e)))?;

        let fetcher = SnapshotFetcher::new(&config.server)?;
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let channel = if config.channel.enabled {
            Some(PushChannel::new(
                config.server.updates_url()?,
                config.channel.reconnect_delay(),
                connector,
                events_tx.clone(),
            ))
        } else {
            None
        };

        Ok(Self {
            store: MetricStore::new(&config.history),
            config,
            fetcher,
            channel,
            dispatcher: Dispatcher::new(),
            presenter,
            events_tx,
            events_rx,
            in_flight: HashSet::new(),
            poller: None,
        })
    }

    /// Replace the push message dispatcher
    pub fn with_dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    pub fn handle(&self) -> ClientHandle {
        ClientHandle {
            events: self.events_tx.clone(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn store(&self) -> &MetricStore {
        &self.store
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn channel_state(&self) -> ConnectionState {
        self.channel
            .as_ref()
            .map(PushChannel::state)
            .unwrap_or_default()
    }

    pub fn retry_pending(&self) -> bool {
        self.channel
            .as_ref()
            .is_some_and(PushChannel::retry_pending)
    }

    /// Run until [`ClientHandle::shutdown`] is called
    pub async fn run(&mut self) -> Result<()> {
        info!(
            "Starting live client for {} (polling: {}, push: {})",
            self.fetcher.base_url(),
            self.config.polling.enabled,
            self.channel.is_some()
        );

        if self.config.polling.fetch_on_start {
            self.fetch_all();
        }

        if self.config.polling.enabled {
            self.start_poller(self.config.polling.interval());
        }

        if let Some(channel) = self.channel.as_mut() {
            if channel.connect() {
                self.presenter.on_connection_state(channel.state());
            }
        }

        while let Some(event) = self.events_rx.recv().await {
            if !self.handle_event(event) {
                break;
            }
        }

        self.stop();
        info!("Live client stopped after {} store writes", self.store.writes());
        Ok(())
    }

    /// Apply one event; returns `false` when the loop should stop
    fn handle_event(&mut self, event: LoopEvent) -> bool {
        match event {
            LoopEvent::Snapshot { kind, result } => {
                self.in_flight.remove(&kind);
                self.apply_snapshot(kind, result);
            }
            LoopEvent::Channel(event) => self.handle_channel_event(event),
            LoopEvent::Refresh(Some(kind)) => self.spawn_fetch(kind),
            LoopEvent::Refresh(None) => self.fetch_all(),
            LoopEvent::Shutdown => {
                info!("Shutdown requested");
                return false;
            }
        }
        true
    }

    fn apply_snapshot(&mut self, kind: MetricKind, result: Result<SnapshotPayload>) {
        let outcome = result.and_then(|payload| self.store.apply(kind, payload));
        if let Err(e) = outcome {
            warn!("Failed to load {} snapshot: {}", kind, e);
            self.store.record_error(kind, e.to_string());
        }
        self.notify(kind);
    }

    fn handle_channel_event(&mut self, event: super::channel::ChannelEvent) {
        let Some(channel) = self.channel.as_mut() else {
            debug!("Dropping channel event with push disabled");
            return;
        };

        let before = channel.state();
        let message = channel.handle(event);
        let after = channel.state();
        if before != after {
            self.presenter.on_connection_state(after);
        }

        if let Some(text) = message {
            let outcome = self.dispatcher.dispatch(&mut self.store, &text);
            if let Some(kind) = outcome.touched() {
                self.notify(kind);
            }
        }
    }

    fn notify(&mut self, kind: MetricKind) {
        let update = self.store.view(kind);
        self.presenter.on_update(&update);
    }

    fn fetch_all(&mut self) {
        for kind in MetricKind::ALL {
            self.spawn_fetch(kind);
        }
    }

    fn spawn_fetch(&mut self, kind: MetricKind) {
        if !self.in_flight.insert(kind) {
            debug!("{} fetch still in flight; skipping", kind);
            return;
        }

        let fetcher = self.fetcher.clone();
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let result = fetcher.fetch_snapshot(kind).await;
            let _ = events.send(LoopEvent::Snapshot { kind, result });
        });
    }

    fn start_poller(&mut self, period: Duration) {
        if self.poller.is_some() {
            return;
        }

        let events = self.events_tx.clone();
        self.poller = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            // First tick completes immediately; start-up fetches cover it
            interval.tick().await;

            loop {
                interval.tick().await;
                if events.send(LoopEvent::Refresh(None)).is_err() {
                    break;
                }
            }
        }));
        debug!("Polling every {}ms", period.as_millis());
    }

    fn stop(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.abort();
        }
        if let Some(channel) = self.channel.as_mut() {
            let was_active = channel.state().is_active();
            channel.shutdown();
            if was_active {
                self.presenter.on_connection_state(channel.state());
            }
        }
    }
}

impl<P: PresentationAdapter> Drop for LiveClient<P> {
    fn drop(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.abort();
        }
    }
}

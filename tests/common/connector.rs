//! Scripted push transport
//!
//! Each `connect` consumes the next scripted session. A session is either a
//! refusal or an open stream the test feeds through a [`PushSession`].

use async_trait::async_trait;
use netmon_live::client::{Connector, MessageStream};
use netmon_live::utils::error::{MonitorError, Result};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use url::Url;

enum Script {
    Refuse,
    Open(UnboundedReceiver<Result<String>>),
}

/// Server end of one scripted connection
pub struct PushSession {
    tx: UnboundedSender<Result<String>>,
}

impl PushSession {
    pub fn send(&self, frame: impl Into<String>) {
        self.tx
            .send(Ok(frame.into()))
            .expect("client stopped reading the push session");
    }

    pub fn fail(self, reason: &str) {
        let _ = self.tx.send(Err(MonitorError::Transport(reason.to_string())));
    }

    /// Close from the server side
    pub fn close(self) {
        drop(self.tx);
    }
}

pub struct ScriptedConnector {
    attempts: AtomicUsize,
    urls: Mutex<Vec<String>>,
    scripts: Mutex<VecDeque<Script>>,
}

impl ScriptedConnector {
    /// Connector whose first `count` connects succeed
    pub fn sessions(count: usize) -> (Arc<Self>, VecDeque<PushSession>) {
        Self::build(0, count)
    }

    /// Connector that refuses `refusals` times, then opens `count` sessions
    pub fn refusing_then(refusals: usize, count: usize) -> (Arc<Self>, VecDeque<PushSession>) {
        Self::build(refusals, count)
    }

    fn build(refusals: usize, count: usize) -> (Arc<Self>, VecDeque<PushSession>) {
        let mut scripts: VecDeque<Script> = (0..refusals).map(|_| Script::Refuse).collect();
        let mut sessions = VecDeque::new();
        for _ in 0..count {
            let (tx, rx) = mpsc::unbounded_channel();
            scripts.push_back(Script::Open(rx));
            sessions.push_back(PushSession { tx });
        }

        let connector = Arc::new(Self {
            attempts: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
            scripts: Mutex::new(scripts),
        });
        (connector, sessions)
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// URLs passed to `connect`, in order
    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Connector for ScriptedConnector {
    async fn connect(&self, url: &Url) -> Result<MessageStream> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());

        let script = self.scripts.lock().unwrap().pop_front();
        match script {
            Some(Script::Open(rx)) => Ok(Box::pin(futures::stream::unfold(rx, |mut rx| async move {
                rx.recv().await.map(|item| (item, rx))
            }))),
            Some(Script::Refuse) | None => Err(MonitorError::Transport(
                "connection refused".to_string(),
            )),
        }
    }
}

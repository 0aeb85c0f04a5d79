//! Scripted chat transport for testing.

use async_trait::async_trait;
use cuecast_delivery::{AbandonReason, ChatTransport, DeliveryProgress, DispatchReport, SendOutcome};
use cuecast_error::{TelegramError, TelegramErrorKind, TelegramResult};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A single scripted answer.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Delivered,
    Throttled(Option<Duration>),
    Rejected(u16, String),
    TransportError(String),
    Unrecoverable(String),
}

/// Transport that answers from a script, then delivers once the script runs out.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    script: Arc<Mutex<VecDeque<MockResponse>>>,
    sent: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    /// Create a transport that accepts everything.
    pub fn always_ok() -> Self {
        Self::default()
    }

    /// Create a transport that plays `responses` in order, then accepts everything.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self {
            script: Arc::new(Mutex::new(responses.into())),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of times send_message() was called.
    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Every text passed to send_message(), in order.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn send_message(&self, text: &str) -> TelegramResult<SendOutcome> {
        self.sent.lock().unwrap().push(text.to_string());

        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(MockResponse::Delivered);

        match next {
            MockResponse::Delivered => Ok(SendOutcome::Delivered),
            MockResponse::Throttled(retry_after) => Ok(SendOutcome::Throttled { retry_after }),
            MockResponse::Rejected(status, description) => {
                Ok(SendOutcome::Rejected { status, description })
            }
            MockResponse::TransportError(message) => {
                Err(TelegramError::new(TelegramErrorKind::Transport(message)))
            }
            MockResponse::Unrecoverable(message) => {
                Err(TelegramError::new(TelegramErrorKind::ClientBuild(message)))
            }
        }
    }

    fn destination(&self) -> &str {
        "mock-chat"
    }
}

/// Progress observer that writes every event to a log.
#[derive(Debug, Clone, Default)]
pub struct RecordingProgress {
    events: Arc<Mutex<Vec<String>>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl DeliveryProgress for RecordingProgress {
    fn on_start(&self, total: usize) {
        self.push(format!("start {}", total));
    }

    fn on_delivered(&self, sent: usize, total: usize) {
        self.push(format!("delivered {}/{}", sent, total));
    }

    fn on_throttled(&self, index: usize, wait: Duration) {
        self.push(format!("throttled {} {}ms", index, wait.as_millis()));
    }

    fn on_transport_failure(&self, index: usize, _error: &TelegramError, wait: Duration) {
        self.push(format!("transport {} {}ms", index, wait.as_millis()));
    }

    fn on_abandoned(&self, index: usize, _reason: &AbandonReason) {
        self.push(format!("abandoned {}", index));
    }

    fn on_finish(&self, report: &DispatchReport) {
        self.push(format!(
            "finish {}/{}",
            report.delivered(),
            report.total()
        ));
    }
}

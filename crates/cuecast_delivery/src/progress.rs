//! Delivery progress reporting.

use crate::{AbandonReason, DispatchReport};
use cuecast_error::TelegramError;
use std::time::Duration;

/// Observer for the dispatch loop. Every method defaults to doing nothing.
pub trait DeliveryProgress: Send + Sync {
    /// Dispatch is starting with `total` entries.
    fn on_start(&self, _total: usize) {}

    /// One more entry was delivered.
    fn on_delivered(&self, _sent: usize, _total: usize) {}

    /// The destination throttled us; waiting `_wait` before retrying.
    fn on_throttled(&self, _index: usize, _wait: Duration) {}

    /// A send attempt failed below HTTP; waiting `_wait` before retrying.
    fn on_transport_failure(&self, _index: usize, _error: &TelegramError, _wait: Duration) {}

    /// An entry was given up on.
    fn on_abandoned(&self, _index: usize, _reason: &AbandonReason) {}

    /// Dispatch finished.
    fn on_finish(&self, _report: &DispatchReport) {}
}

/// Progress observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl DeliveryProgress for NoProgress {}

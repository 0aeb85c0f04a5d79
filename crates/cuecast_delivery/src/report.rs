//! Delivery results.

use cuecast_error::{RateLimitError, TelegramError};

/// Why an entry was given up on.
#[derive(Debug, Clone, derive_more::Display)]
pub enum AbandonReason {
    /// The destination answered with a non-retryable status
    #[display("HTTP {}: {}", status, description)]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Response body
        description: String,
    },
    /// The retry policy refused another attempt
    #[display("{}", _0)]
    RetriesExhausted(RateLimitError),
    /// The transport failed in a way retrying cannot fix
    #[display("{}", _0)]
    Unrecoverable(TelegramError),
}

/// Result of delivering one entry.
#[derive(Debug, Clone)]
pub enum DeliveryOutcome {
    /// Sent; `attempts` counts the successful one
    Delivered {
        /// Requests issued for this entry
        attempts: u32,
    },
    /// Not sent
    Abandoned(AbandonReason),
}

/// An entry that was not delivered.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct AbandonedEntry {
    /// Zero-based position in the dispatched sequence
    index: usize,
    /// Message text that was not delivered
    text: String,
    /// Why it was abandoned
    reason: AbandonReason,
}

impl AbandonedEntry {
    /// Record an abandoned entry.
    pub fn new(index: usize, text: impl Into<String>, reason: AbandonReason) -> Self {
        Self {
            index,
            text: text.into(),
            reason,
        }
    }
}

/// Summary of a whole dispatch run.
#[derive(Debug, Clone, Default, derive_getters::Getters)]
pub struct DispatchReport {
    /// Entries handed to the dispatcher
    total: usize,
    /// Entries the destination accepted
    delivered: usize,
    /// Entries given up on, in order
    abandoned: Vec<AbandonedEntry>,
}

impl DispatchReport {
    /// Start a report for `total` entries.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Count one delivered entry.
    pub fn record_delivered(&mut self) {
        self.delivered += 1;
    }

    /// Record one abandoned entry.
    pub fn record_abandoned(&mut self, entry: AbandonedEntry) {
        self.abandoned.push(entry);
    }

    /// True when every entry was delivered.
    pub fn is_complete(&self) -> bool {
        self.abandoned.is_empty() && self.delivered == self.total
    }
}

//! Chat transport seam.

use async_trait::async_trait;
use cuecast_error::TelegramResult;
use std::time::Duration;

/// How the destination answered one send attempt.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SendOutcome {
    /// Message accepted (HTTP 200)
    #[display("delivered")]
    Delivered,
    /// Too many requests (HTTP 429), with the server's suggested wait if any
    #[display("throttled")]
    Throttled {
        /// Suggested wait before retrying
        retry_after: Option<Duration>,
    },
    /// Any other status; not retried
    #[display("rejected with HTTP {}", status)]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Response body as returned
        description: String,
    },
}

/// Sends one text message to a fixed destination.
///
/// Status-level answers come back as [`SendOutcome`]. `Err` is reserved for
/// network-level failures (connection errors, timeouts, unreadable bodies),
/// which the dispatcher retries.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Attempt to send `text` once.
    async fn send_message(&self, text: &str) -> TelegramResult<SendOutcome>;

    /// Destination identifier, for logging.
    fn destination(&self) -> &str;
}

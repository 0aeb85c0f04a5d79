//! Telegram Bot API error types.

/// Telegram transport error conditions.
///
/// These are failures below the HTTP status level. Status-level rejections
/// are not errors; the transport reports them as outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TelegramErrorKind {
    /// Connection refused, DNS failure, timeout, or body read failure
    #[display("Request failed: {}", _0)]
    Transport(String),
    /// Response body was not a Bot API envelope
    #[display("Malformed response (HTTP {}): {}", status, reason)]
    MalformedResponse {
        /// HTTP status the body arrived with
        status: u16,
        /// Decoder message
        reason: String,
    },
    /// HTTP client could not be constructed
    #[display("Failed to build HTTP client: {}", _0)]
    ClientBuild(String),
}

impl TelegramErrorKind {
    /// Check if this error type should be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            TelegramErrorKind::Transport(_) => true,
            TelegramErrorKind::MalformedResponse { .. } => true,
            TelegramErrorKind::ClientBuild(_) => false,
        }
    }
}

/// Telegram error with source location tracking.
///
/// # Examples
///
/// ```
/// use cuecast_error::{TelegramError, TelegramErrorKind};
///
/// let err = TelegramError::new(TelegramErrorKind::Transport("connection reset".to_string()));
/// assert!(err.is_retryable());
/// assert!(format!("{}", err).contains("connection reset"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Telegram Error: {} at line {} in {}", kind, line, file)]
pub struct TelegramError {
    /// The kind of error that occurred
    pub kind: TelegramErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TelegramError {
    /// Create a new TelegramError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TelegramErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Returns true if the dispatcher should retry after this error.
    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

/// Result type for Telegram operations.
pub type TelegramResult<T> = Result<T, TelegramError>;

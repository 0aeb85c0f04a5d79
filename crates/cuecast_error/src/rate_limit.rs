//! Retry budget error types.

/// Reasons a retry budget refuses another attempt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RateLimitErrorKind {
    /// The configured maximum number of attempts was reached
    #[display("Gave up after {} attempts", _0)]
    AttemptsExhausted(u32),
    /// Waiting again would exceed the configured total wait
    #[display("Total wait of {}ms would exceed the {}ms budget", requested_ms, budget_ms)]
    WaitBudgetExhausted {
        /// Wait accumulated including the refused one
        requested_ms: u128,
        /// Configured maximum
        budget_ms: u128,
    },
}

/// Rate limiting error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Rate Limit Error: {} at line {} in {}", kind, line, file)]
pub struct RateLimitError {
    /// The kind of error that occurred
    pub kind: RateLimitErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RateLimitError {
    /// Create a new rate limiting error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RateLimitErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RateLimitErrorKind {
        &self.kind
    }
}

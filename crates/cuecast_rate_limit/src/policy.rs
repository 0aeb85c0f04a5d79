//! Retry policy.

use derive_setters::Setters;
use std::time::Duration;

/// Delays and bounds applied while delivering messages.
///
/// The default policy waits 1 second between messages, 5 seconds when a
/// throttling response omits its wait, 5 seconds after a transport failure,
/// and retries forever.
///
/// # Examples
///
/// ```
/// use cuecast_rate_limit::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::default()
///     .with_max_attempts(3)
///     .with_inter_message_delay(Duration::from_millis(1500));
///
/// assert_eq!(policy.max_attempts(), Some(3));
/// assert_eq!(policy.inter_message_delay(), Duration::from_millis(1500));
/// assert_eq!(policy.transport_backoff(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Setters)]
#[setters(prefix = "with_", strip_option)]
pub struct RetryPolicy {
    inter_message_delay: Duration,
    default_retry_after: Duration,
    transport_backoff: Duration,
    max_attempts: Option<u32>,
    max_total_wait: Option<Duration>,
}

impl RetryPolicy {
    /// Pause after each message, whatever its outcome.
    pub fn inter_message_delay(&self) -> Duration {
        self.inter_message_delay
    }

    /// Wait used when a throttling response carries no suggested wait.
    pub fn default_retry_after(&self) -> Duration {
        self.default_retry_after
    }

    /// Wait after a transport-level failure.
    pub fn transport_backoff(&self) -> Duration {
        self.transport_backoff
    }

    /// Maximum attempts per message, `None` for unbounded.
    ///
    /// Counts the first attempt, which is always made, so `Some(0)` behaves
    /// like `Some(1)`.
    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }

    /// Maximum accumulated retry wait per message, `None` for unbounded.
    pub fn max_total_wait(&self) -> Option<Duration> {
        self.max_total_wait
    }

    /// True when neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.max_attempts.is_none() && self.max_total_wait.is_none()
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            inter_message_delay: Duration::from_secs(1),
            default_retry_after: Duration::from_secs(5),
            transport_backoff: Duration::from_secs(5),
            max_attempts: None,
            max_total_wait: None,
        }
    }
}

//! Per-message retry accounting.

use crate::RetryPolicy;
use cuecast_error::{RateLimitError, RateLimitErrorKind};
use std::time::Duration;
use tracing::debug;

/// Tracks failed attempts and accumulated waits for one message.
///
/// # Examples
///
/// ```
/// use cuecast_rate_limit::{RetryBudget, RetryPolicy};
/// use std::time::Duration;
///
/// let policy = RetryPolicy::default().with_max_attempts(2);
/// let mut budget = RetryBudget::new(&policy);
///
/// assert!(budget.charge(Duration::from_secs(5)).is_ok());
/// assert!(budget.charge(Duration::from_secs(5)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RetryBudget<'a> {
    policy: &'a RetryPolicy,
    failures: u32,
    waited: Duration,
}

impl<'a> RetryBudget<'a> {
    /// Start a fresh budget for one message.
    pub fn new(policy: &'a RetryPolicy) -> Self {
        Self {
            policy,
            failures: 0,
            waited: Duration::ZERO,
        }
    }

    /// Record a failed attempt and reserve `wait` before the next one.
    ///
    /// # Errors
    ///
    /// Returns [`RateLimitErrorKind::AttemptsExhausted`] when the failed
    /// attempt used the last allowed attempt, and
    /// [`RateLimitErrorKind::WaitBudgetExhausted`] when `wait` would push the
    /// accumulated wait past the policy's maximum.
    pub fn charge(&mut self, wait: Duration) -> Result<(), RateLimitError> {
        self.failures = self.failures.saturating_add(1);

        if let Some(max) = self.policy.max_attempts() {
            if self.failures >= max {
                return Err(RateLimitError::new(RateLimitErrorKind::AttemptsExhausted(
                    self.failures,
                )));
            }
        }

        let requested = self.waited.saturating_add(wait);
        if let Some(budget) = self.policy.max_total_wait() {
            if requested > budget {
                return Err(RateLimitError::new(
                    RateLimitErrorKind::WaitBudgetExhausted {
                        requested_ms: requested.as_millis(),
                        budget_ms: budget.as_millis(),
                    },
                ));
            }
        }

        self.waited = requested;
        debug!(
            failures = self.failures,
            waited_ms = self.waited.as_millis() as u64,
            "Charged retry budget"
        );
        Ok(())
    }

    /// Failed attempts recorded so far.
    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// Wait accumulated so far.
    pub fn waited(&self) -> Duration {
        self.waited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_policy_never_refuses() {
        let policy = RetryPolicy::default();
        let mut budget = RetryBudget::new(&policy);
        for _ in 0..10_000 {
            budget.charge(Duration::from_secs(5)).unwrap();
        }
        assert_eq!(budget.failures(), 10_000);
        assert_eq!(budget.waited(), Duration::from_secs(50_000));
    }

    #[test]
    fn test_attempt_bound_counts_the_first_attempt() {
        let policy = RetryPolicy::default().with_max_attempts(3);
        let mut budget = RetryBudget::new(&policy);
        assert!(budget.charge(Duration::from_secs(1)).is_ok());
        assert!(budget.charge(Duration::from_secs(1)).is_ok());

        let err = budget.charge(Duration::from_secs(1)).unwrap_err();
        assert_eq!(err.kind(), &RateLimitErrorKind::AttemptsExhausted(3));
    }

    #[test]
    fn test_zero_attempt_bound_refuses_first_retry() {
        let policy = RetryPolicy::default().with_max_attempts(0);
        let mut budget = RetryBudget::new(&policy);

        let err = budget.charge(Duration::from_secs(1)).unwrap_err();
        assert_eq!(err.kind(), &RateLimitErrorKind::AttemptsExhausted(1));
        assert_eq!(budget.waited(), Duration::ZERO);
    }

    #[test]
    fn test_wait_bound_refuses_overflowing_wait() {
        let policy = RetryPolicy::default().with_max_total_wait(Duration::from_secs(12));
        let mut budget = RetryBudget::new(&policy);
        assert!(budget.charge(Duration::from_secs(5)).is_ok());
        assert!(budget.charge(Duration::from_secs(7)).is_ok());

        let err = budget.charge(Duration::from_millis(1)).unwrap_err();
        assert_eq!(
            err.kind(),
            &RateLimitErrorKind::WaitBudgetExhausted {
                requested_ms: 12_001,
                budget_ms: 12_000,
            }
        );
        assert_eq!(budget.waited(), Duration::from_secs(12));
    }
}

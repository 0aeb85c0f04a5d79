//! TOML configuration for the retry policy.

use crate::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retry policy as written in configuration files, in milliseconds.
///
/// # Example
///
/// ```toml
/// [delivery]
/// inter_message_delay_ms = 1000
/// default_retry_after_ms = 5000
/// transport_backoff_ms = 5000
/// max_attempts = 20          # omit for unbounded
/// max_total_wait_ms = 600000 # omit for unbounded
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RetryPolicyConfig {
    /// Pause after each message
    #[serde(default = "default_inter_message_delay_ms")]
    pub inter_message_delay_ms: u64,

    /// Wait when a throttling response gives none
    #[serde(default = "default_retry_after_ms")]
    pub default_retry_after_ms: u64,

    /// Wait after a transport failure
    #[serde(default = "default_transport_backoff_ms")]
    pub transport_backoff_ms: u64,

    /// Maximum attempts per message; 0 is read as 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,

    /// Maximum accumulated retry wait per message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_total_wait_ms: Option<u64>,
}

fn default_inter_message_delay_ms() -> u64 {
    1_000
}

fn default_retry_after_ms() -> u64 {
    5_000
}

fn default_transport_backoff_ms() -> u64 {
    5_000
}

impl Default for RetryPolicyConfig {
    fn default() -> Self {
        Self {
            inter_message_delay_ms: default_inter_message_delay_ms(),
            default_retry_after_ms: default_retry_after_ms(),
            transport_backoff_ms: default_transport_backoff_ms(),
            max_attempts: None,
            max_total_wait_ms: None,
        }
    }
}

impl From<&RetryPolicyConfig> for RetryPolicy {
    fn from(config: &RetryPolicyConfig) -> Self {
        let policy = RetryPolicy::default()
            .with_inter_message_delay(Duration::from_millis(config.inter_message_delay_ms))
            .with_default_retry_after(Duration::from_millis(config.default_retry_after_ms))
            .with_transport_backoff(Duration::from_millis(config.transport_backoff_ms));

        let policy = match config.max_attempts {
            Some(max) => policy.with_max_attempts(max.max(1)),
            None => policy,
        };

        match config.max_total_wait_ms {
            Some(ms) => policy.with_max_total_wait(Duration::from_millis(ms)),
            None => policy,
        }
    }
}

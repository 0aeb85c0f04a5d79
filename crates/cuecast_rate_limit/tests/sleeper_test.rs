//! Tests for the wait capability and policy configuration.

use cuecast_rate_limit::{RecordingSleeper, RetryPolicy, RetryPolicyConfig, Sleeper, TokioSleeper};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_tokio_sleeper_advances_paused_clock() {
    let start = tokio::time::Instant::now();
    TokioSleeper.sleep(Duration::from_secs(5)).await;
    assert!(start.elapsed() >= Duration::from_secs(5));
}

#[tokio::test]
async fn test_recording_sleeper_shares_record_across_clones() {
    let sleeper = RecordingSleeper::new();
    let handle = sleeper.clone();

    handle.sleep(Duration::from_secs(1)).await;
    handle.sleep(Duration::from_secs(5)).await;

    assert_eq!(
        sleeper.recorded(),
        vec![Duration::from_secs(1), Duration::from_secs(5)]
    );
    assert_eq!(sleeper.total(), Duration::from_secs(6));
}

#[test]
fn test_default_config_matches_default_policy() {
    let policy = RetryPolicy::from(&RetryPolicyConfig::default());
    assert_eq!(policy, RetryPolicy::default());
    assert!(policy.is_unbounded());
}

#[test]
fn test_config_bounds_carry_into_policy() {
    let config = RetryPolicyConfig {
        inter_message_delay_ms: 250,
        max_attempts: Some(4),
        max_total_wait_ms: Some(30_000),
        ..RetryPolicyConfig::default()
    };

    let policy = RetryPolicy::from(&config);
    assert_eq!(policy.inter_message_delay(), Duration::from_millis(250));
    assert_eq!(policy.default_retry_after(), Duration::from_secs(5));
    assert_eq!(policy.max_attempts(), Some(4));
    assert_eq!(policy.max_total_wait(), Some(Duration::from_secs(30)));
    assert!(!policy.is_unbounded());
}

#[test]
fn test_zero_attempt_bound_is_raised_to_one() {
    let config = RetryPolicyConfig {
        max_attempts: Some(0),
        ..RetryPolicyConfig::default()
    };

    assert_eq!(RetryPolicy::from(&config).max_attempts(), Some(1));
}

//! Retry policy and pacing for message delivery.
//!
//! The dispatcher paces messages through a [`Sleeper`] and asks a
//! [`RetryBudget`] whether another attempt is allowed, both configured from a
//! [`RetryPolicy`]:
//! - [`RetryPolicy`] - Delays and optional bounds, unbounded by default
//! - [`RetryPolicyConfig`] - TOML form of the policy, in milliseconds
//! - [`RetryBudget`] - Per-message attempt and wait accounting
//! - [`TokioSleeper`] / [`RecordingSleeper`] - Real and recorded waits

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod budget;
mod config;
mod policy;
mod sleeper;

pub use budget::RetryBudget;
pub use config::RetryPolicyConfig;
pub use policy::RetryPolicy;
pub use sleeper::{RecordingSleeper, Sleeper, TokioSleeper};

//! Message delivery for cuecast.
//!
//! The [`Dispatcher`] sends dialogue entries one at a time through a
//! [`ChatTransport`], pausing between messages and retrying throttled or
//! failed sends according to a [`RetryPolicy`](cuecast_rate_limit::RetryPolicy).
//!
//! Delivery never fails as a whole. Entries the destination rejects, or that
//! run out of retry budget, are collected in the [`DispatchReport`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dispatcher;
mod progress;
mod report;
mod transport;

pub use dispatcher::Dispatcher;
pub use progress::{DeliveryProgress, NoProgress};
pub use report::{AbandonReason, AbandonedEntry, DeliveryOutcome, DispatchReport};
pub use transport::{ChatTransport, SendOutcome};

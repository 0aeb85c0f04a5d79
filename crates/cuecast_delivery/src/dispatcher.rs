//! Sequential dispatch loop.

use crate::{
    AbandonReason, AbandonedEntry, ChatTransport, DeliveryOutcome, DeliveryProgress,
    DispatchReport, SendOutcome,
};
use cuecast_core::DialogueEntry;
use cuecast_error::{RateLimitError, RateLimitErrorKind, TelegramError};
use cuecast_rate_limit::{RetryBudget, RetryPolicy, Sleeper};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio_retry2::strategy::FixedInterval;
use tokio_retry2::{RetryError, RetryIf};
use tracing::{debug, error, info, instrument, warn};

/// Why one send attempt did not deliver.
#[derive(Debug)]
enum AttemptError {
    /// HTTP 429; retry after the wait
    Throttled(Duration),
    /// Network-level failure; retry after the wait
    Transport { error: TelegramError, wait: Duration },
    /// Stop retrying this entry
    Abandoned(AbandonReason),
}

impl AttemptError {
    fn permanent(reason: AbandonReason) -> RetryError<Self> {
        RetryError::Permanent(AttemptError::Abandoned(reason))
    }
}

fn lock<'m, 'p>(budget: &'m Mutex<RetryBudget<'p>>) -> MutexGuard<'m, RetryBudget<'p>> {
    budget.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Delivers entries one at a time, in order.
///
/// Per entry, the dispatcher repeats the send until the transport reports
/// [`SendOutcome::Delivered`], the destination rejects it, or the retry
/// policy runs out. After every entry it waits the policy's inter-message
/// delay on its [`Sleeper`], whatever happened. Waits between attempts of
/// the same entry run on the Tokio timer.
///
/// # Example
///
/// ```rust,ignore
/// use cuecast_delivery::{Dispatcher, NoProgress};
/// use cuecast_rate_limit::{RetryPolicy, TokioSleeper};
///
/// let dispatcher = Dispatcher::new(telegram_client, TokioSleeper, RetryPolicy::default());
/// let report = dispatcher.dispatch(&entries, &NoProgress).await;
/// println!("{} of {} delivered", report.delivered(), report.total());
/// ```
#[derive(Debug, Clone)]
pub struct Dispatcher<T, S> {
    transport: T,
    sleeper: S,
    policy: RetryPolicy,
}

impl<T: ChatTransport, S: Sleeper> Dispatcher<T, S> {
    /// Create a dispatcher over a transport and a wait capability.
    pub fn new(transport: T, sleeper: S, policy: RetryPolicy) -> Self {
        Self {
            transport,
            sleeper,
            policy,
        }
    }

    /// The transport messages go through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The policy in effect.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Deliver every entry, in order, and summarize the run.
    #[instrument(skip_all, fields(total = entries.len(), destination = self.transport.destination()))]
    pub async fn dispatch(
        &self,
        entries: &[DialogueEntry],
        progress: &dyn DeliveryProgress,
    ) -> DispatchReport {
        let total = entries.len();
        let mut report = DispatchReport::new(total);
        info!("Starting dispatch");
        progress.on_start(total);

        for (index, entry) in entries.iter().enumerate() {
            let text = entry.message_text();

            match self.deliver(index, &text, progress).await {
                DeliveryOutcome::Delivered { attempts } => {
                    report.record_delivered();
                    debug!(index, attempts, "Entry delivered");
                    progress.on_delivered(*report.delivered(), total);
                }
                DeliveryOutcome::Abandoned(reason) => {
                    warn!(index, reason = %reason, "Entry abandoned");
                    progress.on_abandoned(index, &reason);
                    report.record_abandoned(AbandonedEntry::new(index, text, reason));
                }
            }

            self.sleeper.sleep(self.policy.inter_message_delay()).await;
        }

        info!(
            delivered = *report.delivered(),
            abandoned = report.abandoned().len(),
            "Dispatch finished"
        );
        progress.on_finish(&report);
        report
    }

    /// Deliver a single message, retrying as the policy allows.
    ///
    /// Does not apply the inter-message delay.
    #[instrument(skip(self, text, progress), fields(text_len = text.len()))]
    pub async fn deliver(
        &self,
        index: usize,
        text: &str,
        progress: &dyn DeliveryProgress,
    ) -> DeliveryOutcome {
        let budget = Mutex::new(RetryBudget::new(&self.policy));
        let budget_ref = &budget;

        let retries = self
            .policy
            .max_attempts()
            .map_or(usize::MAX, |max| max.saturating_sub(1) as usize);
        let strategy = FixedInterval::new(self.policy.transport_backoff()).take(retries);

        let result = RetryIf::spawn(
            strategy,
            move || self.attempt(text, budget_ref),
            |_: &AttemptError| true,
            |failure: &AttemptError, _: Duration| match failure {
                AttemptError::Throttled(wait) => progress.on_throttled(index, *wait),
                AttemptError::Transport { error, wait } => {
                    progress.on_transport_failure(index, error, *wait)
                }
                AttemptError::Abandoned(_) => {}
            },
        )
        .await;

        let failures = lock(&budget).failures();
        match result {
            Ok(()) => DeliveryOutcome::Delivered {
                attempts: failures + 1,
            },
            Err(AttemptError::Abandoned(reason)) => DeliveryOutcome::Abandoned(reason),
            Err(_) => DeliveryOutcome::Abandoned(AbandonReason::RetriesExhausted(
                RateLimitError::new(RateLimitErrorKind::AttemptsExhausted(failures)),
            )),
        }
    }

    /// One send, classified for the retry loop.
    async fn attempt(
        &self,
        text: &str,
        budget: &Mutex<RetryBudget<'_>>,
    ) -> Result<(), RetryError<AttemptError>> {
        let failure = match self.transport.send_message(text).await {
            Ok(SendOutcome::Delivered) => return Ok(()),
            Ok(SendOutcome::Rejected {
                status,
                description,
            }) => {
                error!(status, description = %description, "Destination rejected message");
                return Err(AttemptError::permanent(AbandonReason::Rejected {
                    status,
                    description,
                }));
            }
            Ok(SendOutcome::Throttled { retry_after }) => {
                let wait = retry_after.unwrap_or(self.policy.default_retry_after());
                warn!(wait_ms = wait.as_millis() as u64, "Rate limited, waiting");
                AttemptError::Throttled(wait)
            }
            Err(e) if !e.is_retryable() => {
                error!(error = %e, "Send attempt failed permanently");
                return Err(AttemptError::permanent(AbandonReason::Unrecoverable(e)));
            }
            Err(e) => {
                error!(error = %e, "Send attempt failed");
                AttemptError::Transport {
                    error: e,
                    wait: self.policy.transport_backoff(),
                }
            }
        };

        let wait = match &failure {
            AttemptError::Throttled(wait) | AttemptError::Transport { wait, .. } => *wait,
            AttemptError::Abandoned(_) => Duration::ZERO,
        };

        match lock(budget).charge(wait) {
            Ok(()) => Err(RetryError::Transient {
                err: failure,
                retry_after: Some(wait),
            }),
            Err(exhausted) => Err(AttemptError::permanent(AbandonReason::RetriesExhausted(
                exhausted,
            ))),
        }
    }
}

//! # Newsletter Subscription
//!
//! The only fallible, asynchronous operation on the site. A submission goes
//! through three stages:
//!
//! 1. **Validation**: empty or malformed emails are rejected locally with an
//!    inline message. The gateway is never called and the form stays `idle`.
//! 2. **Request**: the attempt turns `pending` (the submit control is
//!    disabled) and the gateway is called under a timeout. A timeout or a
//!    gateway failure is retried once.
//! 3. **Outcome**: `succeeded` with a receipt, or `failed` with a message the
//!    form shows while staying editable for another try.
//!
//! The gateway is a trait so the simulated backend used by the site can be
//! swapped for a real one without touching the flow.

use crate::email::validate_email;
use crate::error::{MakerError, Result, SubmissionError};
use crate::model::{SubscriptionAttempt, SubscriptionReceipt, SubscriptionStatus};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::watch;

pub const SUBMISSION_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

#[async_trait]
pub trait SubscriptionGateway: Send + Sync {
    async fn subscribe(&self, email: &str) -> std::result::Result<SubscriptionReceipt, SubmissionError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulatedOutcome {
    Accept,
    Reject(String),
}

/// Stands in for the newsletter backend: answers after a fixed delay.
#[derive(Debug)]
pub struct SimulatedGateway {
    delay: Duration,
    outcome: SimulatedOutcome,
    calls: AtomicUsize,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            outcome: SimulatedOutcome::Accept,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_outcome(mut self, outcome: SimulatedOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SubscriptionGateway for SimulatedGateway {
    async fn subscribe(&self, email: &str) -> std::result::Result<SubscriptionReceipt, SubmissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        match &self.outcome {
            SimulatedOutcome::Accept => Ok(SubscriptionReceipt::new(email)),
            SimulatedOutcome::Reject(reason) => Err(SubmissionError::Rejected(reason.clone())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitPolicy {
    pub timeout: Duration,
    /// Extra attempts after the first one fails.
    pub retries: u32,
}

impl Default for SubmitPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            retries: 1,
        }
    }
}

/// Drives one newsletter form.
///
/// `submit` borrows the subscriber mutably for the whole request, so a second
/// submission cannot start while one is pending.
pub struct Subscriber<G: SubscriptionGateway> {
    gateway: G,
    policy: SubmitPolicy,
    attempt: watch::Sender<SubscriptionAttempt>,
}

impl<G: SubscriptionGateway> Subscriber<G> {
    pub fn new(gateway: G, policy: SubmitPolicy) -> Self {
        let (attempt, _) = watch::channel(SubscriptionAttempt::default());
        Self {
            gateway,
            policy,
            attempt,
        }
    }

    #[cfg(test)]
    pub(crate) fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn attempt(&self) -> SubscriptionAttempt {
        self.attempt.borrow().clone()
    }

    /// Observers of the form state (spinner, disabled button, notices).
    pub fn watch(&self) -> watch::Receiver<SubscriptionAttempt> {
        self.attempt.subscribe()
    }

    /// Back to an empty, idle form.
    pub fn reset(&self) {
        self.attempt.send_replace(SubscriptionAttempt::default());
    }

    pub async fn submit(&mut self, email: &str) -> Result<SubscriptionReceipt> {
        self.attempt.send_replace(SubscriptionAttempt::new(email));

        if let Err(e) = validate_email(email) {
            tracing::debug!(error = %e, "subscription rejected by validation");
            self.attempt
                .send_modify(|a| a.error_message = Some(e.to_string()));
            return Err(MakerError::Validation(e));
        }

        self.attempt
            .send_modify(|a| a.status = SubscriptionStatus::Pending);

        let mut last_error = SubmissionError::TimedOut;
        for attempt_no in 0..=self.policy.retries {
            match tokio::time::timeout(self.policy.timeout, self.gateway.subscribe(email)).await {
                Ok(Ok(receipt)) => {
                    tracing::info!(receipt = %receipt.id, attempt_no, "subscribed");
                    self.attempt
                        .send_modify(|a| a.status = SubscriptionStatus::Succeeded);
                    return Ok(receipt);
                }
                Ok(Err(e)) => {
                    tracing::warn!(error = %e, attempt_no, "subscription request failed");
                    last_error = e;
                }
                Err(_) => {
                    tracing::warn!(timeout = ?self.policy.timeout, attempt_no, "subscription request timed out");
                    last_error = SubmissionError::TimedOut;
                }
            }
        }

        self.attempt.send_modify(|a| {
            a.status = SubscriptionStatus::Failed;
            a.error_message = Some(SUBMISSION_FAILED_MESSAGE.to_string());
        });
        Err(MakerError::Submission(last_error))
    }
}

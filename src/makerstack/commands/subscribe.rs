use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::SubscriptionAttempt;
use crate::subscription::{Subscriber, SubscriptionGateway};

pub const SUBSCRIBED_TITLE: &str = "Successfully subscribed!";
pub const FAILED_TITLE: &str = "Subscription failed";
pub const FAILED_DETAIL: &str = "Please try again later.";

pub async fn run<G: SubscriptionGateway>(
    subscriber: &mut Subscriber<G>,
    brand: &str,
    email: &str,
) -> Result<CmdResult> {
    let receipt = subscriber.submit(email).await?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(SUBSCRIBED_TITLE));
    result.add_message(CmdMessage::info(format!(
        "Welcome to {}. Check your inbox for confirmation.",
        brand
    )));
    Ok(result.with_receipt(receipt))
}

/// What a failed request shows: the form's inline error, then the notice.
pub fn failure_messages(attempt: &SubscriptionAttempt) -> Vec<CmdMessage> {
    let mut messages = Vec::new();
    if let Some(inline) = &attempt.error_message {
        messages.push(CmdMessage::error(inline.clone()));
    }
    messages.push(CmdMessage::error(FAILED_TITLE));
    messages.push(CmdMessage::info(FAILED_DETAIL));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MakerError, ValidationError};
    use crate::model::SubscriptionStatus;
    use crate::commands::MessageLevel;
    use crate::subscription::{SimulatedGateway, SubmitPolicy, SUBMISSION_FAILED_MESSAGE};
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_subscribe_success_messages() {
        let mut subscriber = Subscriber::new(
            SimulatedGateway::new(Duration::from_millis(1500)),
            SubmitPolicy::default(),
        );
        let result = run(&mut subscriber, "MakerStack", "maker@example.com")
            .await
            .unwrap();

        assert_eq!(result.messages[0].content, SUBSCRIBED_TITLE);
        assert_eq!(
            result.messages[1].content,
            "Welcome to MakerStack. Check your inbox for confirmation."
        );
        assert_eq!(result.receipt.unwrap().email, "maker@example.com");
        assert_eq!(subscriber.attempt().status, SubscriptionStatus::Succeeded);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribe_invalid_email() {
        let mut subscriber = Subscriber::new(
            SimulatedGateway::new(Duration::from_millis(1500)),
            SubmitPolicy::default(),
        );
        let err = run(&mut subscriber, "MakerStack", "maker@example")
            .await
            .unwrap_err();
        assert!(matches!(err, MakerError::Validation(ValidationError::Malformed)));
        assert_eq!(subscriber.gateway().calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_shows_inline_error_and_notice() {
        let mut subscriber = Subscriber::new(
            SimulatedGateway::new(Duration::from_secs(30)),
            SubmitPolicy {
                timeout: Duration::from_millis(100),
                retries: 1,
            },
        );
        let err = run(&mut subscriber, "MakerStack", "maker@example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, MakerError::Submission(_)));

        let messages = failure_messages(&subscriber.attempt());
        let contents: Vec<_> = messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            contents,
            vec![SUBMISSION_FAILED_MESSAGE, FAILED_TITLE, FAILED_DETAIL]
        );
        assert_eq!(messages[1].level, MessageLevel::Error);
    }
}

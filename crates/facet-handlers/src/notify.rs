//! Notification providers
//!
//! Interchangeable implementations of `NotifyOps`, one per delivery
//! channel.

use facet_core::effects::NotifyOps;
use facet_core::Receipt;

/// Provider that dispatches over email
#[derive(Debug, Clone, Default)]
pub struct EmailNotifier;

impl EmailNotifier {
    /// Create a new email provider
    pub fn new() -> Self {
        Self
    }
}

impl NotifyOps for EmailNotifier {
    fn notify(&self, body: &str) -> Receipt {
        tracing::info!(provider = "email-notifier", "dispatching");
        Receipt::new(
            "email-notifier",
            "notify",
            format!("email dispatched: {body}"),
        )
    }
}

/// Provider that dispatches over sms
#[derive(Debug, Clone, Default)]
pub struct SmsNotifier;

impl SmsNotifier {
    /// Create a new sms provider
    pub fn new() -> Self {
        Self
    }
}

impl NotifyOps for SmsNotifier {
    fn notify(&self, body: &str) -> Receipt {
        tracing::info!(provider = "sms-notifier", "dispatching");
        Receipt::new("sms-notifier", "notify", format!("sms dispatched: {body}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn providers_echo_the_body_with_their_own_framing() {
        let email = EmailNotifier::new().notify("vault door left ajar");
        assert_eq!(email.role, "email-notifier");
        assert_eq!(email.detail, "email dispatched: vault door left ajar");

        let sms = SmsNotifier::new().notify("vault door left ajar");
        assert_eq!(sms.role, "sms-notifier");
        assert_eq!(sms.detail, "sms dispatched: vault door left ajar");
    }
}

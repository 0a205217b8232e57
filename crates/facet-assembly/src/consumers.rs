//! Consumers holding abstract providers
//!
//! A consumer receives its provider as a capability reference at
//! construction time and never names a concrete provider type. The same
//! consumer logic runs unchanged under every provider the assembler can
//! bind; only the provider-attributed receipt content differs.

use facet_core::effects::{ChargeOps, NotifyOps};
use facet_core::{Receipt, Transcript};
use std::sync::Arc;

/// Handset charged through whichever charger was bound at construction.
pub struct Handset {
    charger: Arc<dyn ChargeOps>,
}

impl Handset {
    /// Create a handset bound to a charger.
    pub fn new(charger: Arc<dyn ChargeOps>) -> Self {
        Self { charger }
    }

    /// Charge the handset and report a full battery.
    pub fn top_up(&self) -> Transcript {
        vec![
            self.charger.charge(),
            Receipt::new("handset", "top-up", "battery reported full"),
        ]
    }
}

/// Alert desk that escalates incidents through whichever channel was bound
/// at construction.
pub struct AlertDesk {
    notifier: Arc<dyn NotifyOps>,
}

impl AlertDesk {
    /// Create an alert desk bound to a notification channel.
    pub fn new(notifier: Arc<dyn NotifyOps>) -> Self {
        Self { notifier }
    }

    /// Escalate an incident over the bound channel.
    pub fn raise(&self, incident: &str) -> Transcript {
        vec![
            self.notifier.notify(incident),
            Receipt::new(
                "alert-desk",
                "raise",
                format!("incident escalated: {incident}"),
            ),
        ]
    }
}

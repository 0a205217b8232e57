//! Charging providers
//!
//! Interchangeable implementations of `ChargeOps`. The receipts attribute
//! the concrete provider, which is exactly the content a provider swap is
//! allowed to change.

use facet_core::effects::ChargeOps;
use facet_core::Receipt;

/// Charger that delivers over the service cable
#[derive(Debug, Clone, Default)]
pub struct WiredCharger;

impl WiredCharger {
    /// Create a new wired charger
    pub fn new() -> Self {
        Self
    }
}

impl ChargeOps for WiredCharger {
    fn charge(&self) -> Receipt {
        tracing::info!(provider = "wired-charger", "charging");
        Receipt::new(
            "wired-charger",
            "charge",
            "charge delivered over the service cable",
        )
    }
}

/// Charger that delivers over the induction pad
#[derive(Debug, Clone, Default)]
pub struct WirelessCharger;

impl WirelessCharger {
    /// Create a new wireless charger
    pub fn new() -> Self {
        Self
    }
}

impl ChargeOps for WirelessCharger {
    fn charge(&self) -> Receipt {
        tracing::info!(provider = "wireless-charger", "charging");
        Receipt::new(
            "wireless-charger",
            "charge",
            "charge delivered over the induction pad",
        )
    }
}

//! Property test strategies for Facet types
//!
//! This module provides proptest strategies for generating call sequences
//! and provider choices. These strategies are deterministic and composable,
//! so substitution and swap checks can range over generated inputs without
//! losing reproducibility.

use proptest::prelude::*;

// Re-export proptest for convenience
pub use proptest;

use facet_assembly::{ChargePort, NotifyChannel};
use facet_core::effects::ResidentOps;
use facet_core::Transcript;

/// One base-capability call a keeper routine may make on any resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResidentCall {
    /// Invoke `forage`
    Forage,
    /// Invoke `preen`
    Preen,
}

/// Apply a generated call sequence to a resident through the base
/// capability, collecting the observable output.
pub fn apply_resident_calls(resident: &dyn ResidentOps, calls: &[ResidentCall]) -> Transcript {
    calls
        .iter()
        .map(|call| match call {
            ResidentCall::Forage => resident.forage(),
            ResidentCall::Preen => resident.preen(),
        })
        .collect()
}

/// Strategy for generating base-capability call sequences
pub fn arb_resident_calls() -> impl Strategy<Value = Vec<ResidentCall>> {
    prop::collection::vec(
        prop_oneof![Just(ResidentCall::Forage), Just(ResidentCall::Preen)],
        0..16,
    )
}

/// Strategy for generating a charger choice
pub fn arb_charge_port() -> impl Strategy<Value = ChargePort> {
    prop_oneof![Just(ChargePort::Wired), Just(ChargePort::Wireless)]
}

/// Strategy for generating a notification channel choice
pub fn arb_notify_channel() -> impl Strategy<Value = NotifyChannel> {
    prop_oneof![Just(NotifyChannel::Email), Just(NotifyChannel::Sms)]
}

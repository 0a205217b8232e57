//! Facet Handlers - Role Entities and Providers
//!
//! Concrete implementations of the capability traits defined in
//! `facet-core`. Each entity declares exactly the contracts it can honor,
//! so every operation reachable through a declared contract completes
//! without a failure path.
//!
//! The one exception is deliberate: [`legacy`] keeps the pre-split kiosk
//! interface, whose lobby unit must refuse technician operations at call
//! time. It exists to contrast against the corrected entities in [`kiosk`].

#![forbid(unsafe_code)]

/// Aviary residents: base capability plus opt-in flight
pub mod aviary;

/// Corrected kiosk units, one contract per consumer role
pub mod kiosk;

/// Pre-split kiosk interface kept for contrast
pub mod legacy;

/// Notification providers
pub mod notify;

/// Charging providers
pub mod power;

pub use aviary::{Penguin, Sparrow};
pub use kiosk::{BranchAtm, LobbyAtm};
pub use notify::{EmailNotifier, SmsNotifier};
pub use power::{WiredCharger, WirelessCharger};

//! Capability Trait Definitions
//!
//! Pure trait definitions for every capability set in the workspace.
//! This module defines **what** each consumer role may ask for; handlers in
//! `facet-handlers` define **how** an entity performs it.
//!
//! # Capability Classification
//!
//! ## Role-Scoped Capabilities (`facet-handlers::kiosk`)
//! Kiosk operations split by consumer role:
//! - **Customer** (`CustomerOps`): withdraw, deposit, balance
//! - **Service** (`ServiceOps`): refill, repair
//!
//! ## Base + Extension Capabilities (`facet-handlers::aviary`)
//! A base capability every resident honors, with flight as a separate
//! opt-in contract rather than a promise of the base:
//! - **Resident** (`ResidentOps`): forage, preen
//! - **Flight** (`FlightOps`): fly
//!
//! ## Provider Capabilities (`facet-handlers::power`, `facet-handlers::notify`)
//! Abstractions a consumer holds by reference; an assembler binds the
//! concrete provider at construction time:
//! - **Charge** (`ChargeOps`): charge
//! - **Notify** (`NotifyOps`): notify
//!
//! ## Composite Capabilities (this crate)
//! Convenience supertraits combining other capabilities (no handlers needed)
//!
//! Every trait is object-safe so consumers and routines can hold `dyn`
//! references and remain ignorant of concrete entity types.

pub mod aviary;
pub mod kiosk;
pub mod notify;
pub mod power;
pub mod supertraits;

pub use aviary::{FlightOps, ResidentOps};
pub use kiosk::{CustomerOps, ServiceOps};
pub use notify::NotifyOps;
pub use power::ChargeOps;
pub use supertraits::FullServiceOps;

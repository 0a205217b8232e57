//! Kiosk capability interfaces, split by consumer role
//!
//! # Capability Classification
//!
//! - **Category**: Role-Scoped Capability
//! - **Implementation**: `facet-handlers::kiosk`
//! - **Usage**: customer front-ends consume `CustomerOps`; technician
//!   tooling consumes `ServiceOps`
//!
//! The two roles need disjoint operation sets, so each gets its own
//! contract. A unit declares a contract only when it can honor every
//! operation in it: a lobby unit declares `CustomerOps` alone, while a
//! full-service branch unit declares both. The pre-split shape of this
//! interface survives as `facet_handlers::legacy::KioskOps`, where the
//! lobby unit is forced to refuse technician operations at call time.

use crate::Receipt;

/// Operations available to a customer at a kiosk.
pub trait CustomerOps: Send + Sync {
    /// Dispense cash from the tray.
    fn withdraw(&self) -> Receipt;

    /// Accept an envelope for processing.
    fn deposit(&self) -> Receipt;

    /// Print a balance slip.
    fn balance(&self) -> Receipt;
}

/// Operations available to a service technician at a kiosk.
pub trait ServiceOps: Send + Sync {
    /// Restock the cash cassettes.
    fn refill(&self) -> Receipt;

    /// Run a diagnostic and repair pass.
    fn repair(&self) -> Receipt;
}

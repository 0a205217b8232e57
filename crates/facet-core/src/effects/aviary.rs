//! Aviary capability interfaces: a base contract plus an opt-in extension
//!
//! # Capability Classification
//!
//! - **Category**: Base + Extension Capability
//! - **Implementation**: `facet-handlers::aviary`
//! - **Usage**: keeper routines consume `ResidentOps`; flight checks
//!   consume `FlightOps`
//!
//! `ResidentOps` promises only what every resident can do. Flight is a
//! separate contract declared by the residents that can genuinely perform
//! it; the base contract never mentions it. A routine written against
//! `ResidentOps` therefore produces the same observable output no matter
//! which resident it is handed, and a resident without `FlightOps` cannot
//! have `fly` invoked at all.

use crate::Receipt;

/// Operations every aviary resident honors.
///
/// Implementations must be observably indistinguishable through this
/// contract: the receipts attribute the role, not the concrete resident.
pub trait ResidentOps: Send + Sync {
    /// Forage from the seed tray.
    fn forage(&self) -> Receipt;

    /// Preen feathers.
    fn preen(&self) -> Receipt;
}

/// Flight operations, declared only by residents that can fly.
pub trait FlightOps: Send + Sync {
    /// Complete a circuit of the aviary.
    fn fly(&self) -> Receipt;
}

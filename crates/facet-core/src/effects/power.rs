//! Charging provider capability
//!
//! Consumers hold this contract by reference; the assembler in
//! `facet-assembly` decides which concrete charger satisfies it.

use crate::Receipt;

/// Provider contract for delivering a charge.
pub trait ChargeOps: Send + Sync {
    /// Deliver a charge and confirm how it was delivered.
    fn charge(&self) -> Receipt;
}

//! Sealed supertraits for common capability combinations
//!
//! This module provides sealed supertraits that group capability
//! combinations an entity may honor together. Composition of independent
//! contracts replaces any inheritance chain: an entity opts into each
//! contract it can honor and receives the combination automatically.

use super::{CustomerOps, ServiceOps};

/// Sealed supertrait for units that serve both kiosk roles
///
/// Combines the customer and technician contracts for full-service units
/// that can honor every operation of both.
pub trait FullServiceOps: CustomerOps + ServiceOps {
    // Sealed trait - users cannot implement this directly
}

/// Automatic implementation for types that satisfy the required bounds
impl<T> FullServiceOps for T where T: CustomerOps + ServiceOps {}

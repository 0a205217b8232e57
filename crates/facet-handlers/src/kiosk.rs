//! Kiosk units with role-scoped contracts
//!
//! This module provides the corrected kiosk entities. The lobby unit serves
//! customers only and declares `CustomerOps` alone; the branch unit serves
//! both roles and declares both contracts. Neither unit carries an
//! operation it cannot perform, so nothing here returns an error.

use facet_core::effects::{CustomerOps, ServiceOps};
use facet_core::Receipt;

/// Customer-facing lobby unit
///
/// Declares only the customer contract. Technician tooling cannot be
/// pointed at a lobby unit because the unit never claims `ServiceOps`.
#[derive(Debug, Clone, Default)]
pub struct LobbyAtm;

impl LobbyAtm {
    /// Create a new lobby unit
    pub fn new() -> Self {
        Self
    }
}

impl CustomerOps for LobbyAtm {
    fn withdraw(&self) -> Receipt {
        tracing::info!(unit = "lobby-atm", "dispensing cash");
        Receipt::new("lobby-atm", "withdraw", "cash dispensed from the tray")
    }

    fn deposit(&self) -> Receipt {
        tracing::info!(unit = "lobby-atm", "accepting envelope");
        Receipt::new("lobby-atm", "deposit", "envelope accepted for processing")
    }

    fn balance(&self) -> Receipt {
        tracing::info!(unit = "lobby-atm", "printing balance slip");
        Receipt::new("lobby-atm", "balance", "balance slip printed")
    }
}

/// Full-service branch unit
///
/// Declares both kiosk contracts and honors every operation of each, so it
/// also satisfies the `FullServiceOps` combination automatically.
#[derive(Debug, Clone, Default)]
pub struct BranchAtm;

impl BranchAtm {
    /// Create a new branch unit
    pub fn new() -> Self {
        Self
    }
}

impl CustomerOps for BranchAtm {
    fn withdraw(&self) -> Receipt {
        tracing::info!(unit = "branch-atm", "dispensing cash");
        Receipt::new("branch-atm", "withdraw", "cash dispensed from the tray")
    }

    fn deposit(&self) -> Receipt {
        tracing::info!(unit = "branch-atm", "accepting envelope");
        Receipt::new("branch-atm", "deposit", "envelope accepted for processing")
    }

    fn balance(&self) -> Receipt {
        tracing::info!(unit = "branch-atm", "printing balance slip");
        Receipt::new("branch-atm", "balance", "balance slip printed")
    }
}

impl ServiceOps for BranchAtm {
    fn refill(&self) -> Receipt {
        tracing::info!(unit = "branch-atm", "restocking cassettes");
        Receipt::new("branch-atm", "refill", "cassettes restocked")
    }

    fn repair(&self) -> Receipt {
        tracing::info!(unit = "branch-atm", "running diagnostics");
        Receipt::new("branch-atm", "repair", "diagnostic pass completed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_core::effects::FullServiceOps;

    #[test]
    fn lobby_unit_completes_every_customer_operation() {
        let unit = LobbyAtm::new();
        assert_eq!(unit.withdraw().operation, "withdraw");
        assert_eq!(unit.deposit().operation, "deposit");
        assert_eq!(unit.balance().operation, "balance");
    }

    #[test]
    fn branch_unit_completes_every_operation_of_both_contracts() {
        let unit = BranchAtm::new();
        assert_eq!(unit.withdraw().operation, "withdraw");
        assert_eq!(unit.deposit().operation, "deposit");
        assert_eq!(unit.balance().operation, "balance");
        assert_eq!(unit.refill().operation, "refill");
        assert_eq!(unit.repair().operation, "repair");
    }

    #[test]
    fn branch_unit_satisfies_the_full_service_combination() {
        let unit = BranchAtm::new();
        let full: &dyn FullServiceOps = &unit;
        assert_eq!(full.balance().role, "branch-atm");
        assert_eq!(full.refill().role, "branch-atm");
    }
}

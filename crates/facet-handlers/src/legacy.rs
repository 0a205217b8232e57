//! Pre-split kiosk interface, kept for contrast
//!
//! One wide interface carries the operations of both consumer roles, which
//! forces the lobby unit to declare technician operations it cannot honor.
//! Those operations refuse at call time with [`FacetError::Unsupported`].
//! The corrected entities in [`crate::kiosk`] make this refusal
//! unrepresentable by splitting the interface per role.

use facet_core::{FacetError, Receipt, Result};

/// The monolithic kiosk interface serving every consumer role at once.
pub trait KioskOps: Send + Sync {
    /// Dispense cash from the tray.
    fn withdraw(&self) -> Result<Receipt>;

    /// Accept an envelope for processing.
    fn deposit(&self) -> Result<Receipt>;

    /// Print a balance slip.
    fn balance(&self) -> Result<Receipt>;

    /// Restock the cash cassettes.
    fn refill(&self) -> Result<Receipt>;

    /// Run a diagnostic and repair pass.
    fn repair(&self) -> Result<Receipt>;
}

/// Lobby unit forced onto the monolithic interface.
///
/// The customer operations work; the technician operations cannot, and the
/// interface leaves refusal at call time as the only way to say so.
#[derive(Debug, Clone, Default)]
pub struct LobbyAtm;

impl LobbyAtm {
    /// Create a new lobby unit on the monolithic interface
    pub fn new() -> Self {
        Self
    }
}

impl KioskOps for LobbyAtm {
    fn withdraw(&self) -> Result<Receipt> {
        Ok(Receipt::new(
            "lobby-atm",
            "withdraw",
            "cash dispensed from the tray",
        ))
    }

    fn deposit(&self) -> Result<Receipt> {
        Ok(Receipt::new(
            "lobby-atm",
            "deposit",
            "envelope accepted for processing",
        ))
    }

    fn balance(&self) -> Result<Receipt> {
        Ok(Receipt::new("lobby-atm", "balance", "balance slip printed"))
    }

    fn refill(&self) -> Result<Receipt> {
        tracing::warn!(unit = "lobby-atm", "refill requested on a customer-only unit");
        Err(FacetError::unsupported("lobby-atm", "refill"))
    }

    fn repair(&self) -> Result<Receipt> {
        tracing::warn!(unit = "lobby-atm", "repair requested on a customer-only unit");
        Err(FacetError::unsupported("lobby-atm", "repair"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn customer_operations_still_complete() {
        let unit = LobbyAtm::new();
        assert!(unit.withdraw().is_ok());
        assert!(unit.deposit().is_ok());
        assert!(unit.balance().is_ok());
    }

    #[test]
    fn technician_operations_refuse_at_call_time() {
        let unit = LobbyAtm::new();
        assert_matches!(
            unit.refill(),
            Err(FacetError::Unsupported { ref role, ref operation })
                if role == "lobby-atm" && operation == "refill"
        );
        assert_matches!(
            unit.repair(),
            Err(FacetError::Unsupported { ref role, ref operation })
                if role == "lobby-atm" && operation == "repair"
        );
    }
}

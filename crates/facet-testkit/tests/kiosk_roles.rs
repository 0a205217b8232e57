//! Role-scoped kiosk checks.
//!
//! Every corrected unit completes every operation of every contract it
//! declares. The monolithic contrast interface shows the refusal the split
//! was built to eliminate.

use assert_matches::assert_matches;
use facet_assembly::routines::{customer_session, full_inspection, service_visit};
use facet_core::FacetError;
use facet_handlers::legacy::{self, KioskOps};
use facet_handlers::{BranchAtm, LobbyAtm};
use facet_testkit::assertions::assert_contains_operation;

#[test]
fn corrected_units_complete_every_declared_operation() {
    let lobby = customer_session(&LobbyAtm::new());
    assert_contains_operation(&lobby, "lobby-atm", "balance");
    assert_contains_operation(&lobby, "lobby-atm", "withdraw");
    assert_contains_operation(&lobby, "lobby-atm", "deposit");

    let branch = BranchAtm::new();
    let customer = customer_session(&branch);
    let service = service_visit(&branch);
    assert_eq!(customer.len(), 3);
    assert_eq!(service.len(), 2);
    assert_contains_operation(&service, "branch-atm", "refill");
    assert_contains_operation(&service, "branch-atm", "repair");
}

#[test]
fn full_inspection_requires_both_contracts() {
    let transcript = full_inspection(&BranchAtm::new());
    assert_contains_operation(&transcript, "branch-atm", "balance");
    assert_contains_operation(&transcript, "branch-atm", "repair");
}

#[test]
fn monolithic_interface_forces_call_time_refusal() {
    let unit = legacy::LobbyAtm::new();

    // The operations the unit can honor still work.
    assert!(unit.balance().is_ok());

    // The operations it cannot honor have no other way to say so.
    assert_matches!(unit.refill(), Err(FacetError::Unsupported { .. }));
    assert_matches!(unit.repair(), Err(FacetError::Unsupported { .. }));
}

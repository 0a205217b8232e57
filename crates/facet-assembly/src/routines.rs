//! Routines written against capability references
//!
//! Each routine takes a `dyn` capability reference and collects the
//! receipts of a short, fixed call sequence. None of them can fail, and
//! none of them can reach an operation outside the capability they were
//! handed.

use facet_core::effects::{CustomerOps, FlightOps, FullServiceOps, ResidentOps, ServiceOps};
use facet_core::Transcript;

/// A customer session: statement, withdrawal, deposit.
pub fn customer_session(unit: &dyn CustomerOps) -> Transcript {
    vec![unit.balance(), unit.withdraw(), unit.deposit()]
}

/// A technician visit: restock, then diagnostics.
pub fn service_visit(unit: &dyn ServiceOps) -> Transcript {
    vec![unit.refill(), unit.repair()]
}

/// A combined inspection on a unit that serves both kiosk roles.
pub fn full_inspection(unit: &dyn FullServiceOps) -> Transcript {
    vec![unit.balance(), unit.refill(), unit.repair()]
}

/// Morning keeper rounds over any resident.
///
/// This routine only ever invokes base-capability operations, so its
/// transcript is identical for every resident it is handed.
pub fn morning_rounds(resident: &dyn ResidentOps) -> Transcript {
    vec![resident.forage(), resident.preen()]
}

/// Flight check on a resident that declares the flight capability.
///
/// A resident without the flight capability cannot be handed to this
/// routine at all:
///
/// ```compile_fail
/// use facet_assembly::routines::flight_check;
/// use facet_handlers::Penguin;
///
/// flight_check(&Penguin::new());
/// ```
pub fn flight_check(flier: &dyn FlightOps) -> Transcript {
    vec![flier.fly()]
}

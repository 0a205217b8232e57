//! The fixed demonstration sequence
//!
//! One linear pass over all three scenarios. Every entity is created once
//! at the start, every call dispatches through a capability reference, and
//! nothing on this path can fail.

use crate::assembler::Assembly;
use crate::routines::{
    customer_session, flight_check, full_inspection, morning_rounds, service_visit,
};
use facet_core::Transcript;
use facet_handlers::{BranchAtm, LobbyAtm, Penguin, Sparrow};

/// Run the full walkthrough against a bound assembly.
pub fn run_walkthrough(assembly: &Assembly) -> Transcript {
    let lobby = LobbyAtm::new();
    let branch = BranchAtm::new();
    let sparrow = Sparrow::new();
    let penguin = Penguin::new();

    let mut transcript = Transcript::new();

    // Role-scoped kiosk contracts.
    transcript.extend(customer_session(&lobby));
    transcript.extend(customer_session(&branch));
    transcript.extend(service_visit(&branch));
    transcript.extend(full_inspection(&branch));

    // Base capability plus opt-in flight.
    transcript.extend(morning_rounds(&sparrow));
    transcript.extend(morning_rounds(&penguin));
    transcript.extend(flight_check(&sparrow));

    // Consumers against assembler-bound providers.
    transcript.extend(assembly.handset().top_up());
    transcript.extend(assembly.alert_desk().raise("vault door left ajar"));

    transcript
}

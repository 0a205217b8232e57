//! Walkthrough checks.
//!
//! The demonstration sequence is deterministic, touches every scenario,
//! and never takes the monolithic contrast path.

use facet_assembly::{run_walkthrough, Assembly};
use facet_testkit::assertions::assert_contains_operation;
use facet_testkit::fixtures::all_assemblies;

#[test]
fn walkthrough_covers_all_three_scenarios() {
    let transcript = run_walkthrough(&Assembly::default());

    assert_contains_operation(&transcript, "lobby-atm", "withdraw");
    assert_contains_operation(&transcript, "branch-atm", "refill");
    assert_contains_operation(&transcript, "resident", "forage");
    assert_contains_operation(&transcript, "sparrow", "fly");
    assert_contains_operation(&transcript, "wired-charger", "charge");
    assert_contains_operation(&transcript, "handset", "top-up");
    assert_contains_operation(&transcript, "email-notifier", "notify");
    assert_contains_operation(&transcript, "alert-desk", "raise");
}

#[test]
fn walkthrough_is_stable_for_a_fixed_binding() {
    let assembly = Assembly::default();
    assert_eq!(run_walkthrough(&assembly), run_walkthrough(&assembly));
}

#[test]
fn only_provider_receipts_vary_across_bindings() {
    let baseline = run_walkthrough(&Assembly::default());
    for (_, _, assembly) in all_assemblies() {
        let transcript = run_walkthrough(&assembly);
        assert_eq!(transcript.len(), baseline.len());
        for (receipt, base) in transcript.iter().zip(&baseline) {
            if base.operation == "charge" || base.operation == "notify" {
                continue;
            }
            assert_eq!(receipt, base);
        }
    }
}

//! Provider-swap checks for the assembler-bound consumers.
//!
//! Rebinding a provider may change only the provider-attributed receipt
//! content. The consumer's own receipts, and the shape of its transcript,
//! are identical across every assembly the assembler can bind.

use facet_assembly::{ChargePort, NotifyChannel};
use facet_testkit::assert_receipt;
use facet_testkit::fixtures::{all_assemblies, assembly};

#[test]
fn handset_output_is_attributable_to_the_bound_charger() {
    for (port, _, assembly) in all_assemblies() {
        let transcript = assembly.handset().top_up();
        let expected = match port {
            ChargePort::Wired => "wired-charger",
            ChargePort::Wireless => "wireless-charger",
        };
        assert_receipt!(transcript[0], expected, "charge");
    }
}

#[test]
fn alert_output_is_attributable_to_the_bound_channel() {
    for (_, channel, assembly) in all_assemblies() {
        let transcript = assembly.alert_desk().raise("cassette jam");
        let expected = match channel {
            NotifyChannel::Email => "email-notifier",
            NotifyChannel::Sms => "sms-notifier",
        };
        assert_receipt!(transcript[0], expected, "notify");
    }
}

#[test]
fn consumer_receipts_are_identical_across_every_binding() {
    let transcripts: Vec<_> = all_assemblies()
        .into_iter()
        .map(|(_, _, assembly)| {
            (
                assembly.handset().top_up(),
                assembly.alert_desk().raise("cassette jam"),
            )
        })
        .collect();

    for (handset, alerts) in &transcripts {
        // The consumer-attributed tail never varies with the binding.
        assert_eq!(handset[1], transcripts[0].0[1]);
        assert_eq!(alerts[1], transcripts[0].1[1]);
        // Transcript shape is fixed: one provider receipt, one consumer receipt.
        assert_eq!(handset.len(), 2);
        assert_eq!(alerts.len(), 2);
    }
}

#[test]
fn swapping_one_provider_leaves_the_other_binding_untouched() {
    let wired = assembly(ChargePort::Wired, NotifyChannel::Sms);
    let wireless = assembly(ChargePort::Wireless, NotifyChannel::Sms);
    assert_eq!(
        wired.alert_desk().raise("ping"),
        wireless.alert_desk().raise("ping"),
    );
}

//! Canonical entities and assemblies
//!
//! Everything in the workspace is deterministic, so fixtures are plain
//! constructors. `all_assemblies` enumerates every provider combination the
//! assembler can bind, which the swap-law tests range over exhaustively.

use facet_assembly::{Assembly, AssemblyConfig, ChargePort, NotifyChannel};

/// An assembly for a specific provider combination.
pub fn assembly(charge_port: ChargePort, notify_channel: NotifyChannel) -> Assembly {
    Assembly::from_config(&AssemblyConfig {
        charge_port,
        notify_channel,
    })
}

/// Every provider combination the assembler can bind.
pub fn all_assemblies() -> Vec<(ChargePort, NotifyChannel, Assembly)> {
    let mut out = Vec::new();
    for port in [ChargePort::Wired, ChargePort::Wireless] {
        for channel in [NotifyChannel::Email, NotifyChannel::Sms] {
            out.push((port, channel, assembly(port, channel)));
        }
    }
    out
}

//! External provider binding
//!
//! The assembler is the one place in the workspace that names concrete
//! provider types. It reads the configuration, binds one provider per
//! abstract capability, and hands consumers their references at
//! construction time.

use crate::config::{AssemblyConfig, ChargePort, NotifyChannel};
use crate::consumers::{AlertDesk, Handset};
use facet_core::effects::{ChargeOps, NotifyOps};
use facet_handlers::{EmailNotifier, SmsNotifier, WiredCharger, WirelessCharger};
use std::sync::Arc;

/// A bound set of providers, ready to construct consumers.
pub struct Assembly {
    charger: Arc<dyn ChargeOps>,
    notifier: Arc<dyn NotifyOps>,
}

impl Assembly {
    /// Bind concrete providers according to the configuration.
    pub fn from_config(config: &AssemblyConfig) -> Self {
        let charger: Arc<dyn ChargeOps> = match config.charge_port {
            ChargePort::Wired => Arc::new(WiredCharger::new()),
            ChargePort::Wireless => Arc::new(WirelessCharger::new()),
        };
        let notifier: Arc<dyn NotifyOps> = match config.notify_channel {
            NotifyChannel::Email => Arc::new(EmailNotifier::new()),
            NotifyChannel::Sms => Arc::new(SmsNotifier::new()),
        };
        tracing::debug!(
            charge_port = config.charge_port.label(),
            notify_channel = config.notify_channel.label(),
            "assembly bound"
        );
        Self { charger, notifier }
    }

    /// Construct a handset against the bound charger.
    pub fn handset(&self) -> Handset {
        Handset::new(Arc::clone(&self.charger))
    }

    /// Construct an alert desk against the bound channel.
    pub fn alert_desk(&self) -> AlertDesk {
        AlertDesk::new(Arc::clone(&self.notifier))
    }
}

impl Default for Assembly {
    fn default() -> Self {
        Self::from_config(&AssemblyConfig::default())
    }
}

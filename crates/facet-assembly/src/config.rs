//! Assembly configuration
//!
//! Provider choices load from TOML or fall back to defaults. The config
//! layer is the only input to the assembler, so a provider swap is a config
//! edit and nothing else.

use facet_core::{FacetError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which concrete charger the assembler binds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChargePort {
    /// Deliver over the service cable
    #[default]
    Wired,
    /// Deliver over the induction pad
    Wireless,
}

impl ChargePort {
    /// Stable label used in logs and demo output
    pub fn label(&self) -> &'static str {
        match self {
            Self::Wired => "wired",
            Self::Wireless => "wireless",
        }
    }
}

/// Which concrete notification channel the assembler binds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotifyChannel {
    /// Dispatch over email
    #[default]
    Email,
    /// Dispatch over sms
    Sms,
}

impl NotifyChannel {
    /// Stable label used in logs and demo output
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Sms => "sms",
        }
    }
}

/// Provider choices for one assembly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyConfig {
    /// Charger to bind
    #[serde(default)]
    pub charge_port: ChargePort,
    /// Notification channel to bind
    #[serde(default)]
    pub notify_channel: NotifyChannel,
}

impl AssemblyConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| FacetError::config(e.to_string()))
    }

    /// Load a configuration from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| FacetError::config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_wired_and_email() {
        let config = AssemblyConfig::default();
        assert_eq!(config.charge_port, ChargePort::Wired);
        assert_eq!(config.notify_channel, NotifyChannel::Email);
    }

    #[test]
    fn toml_overrides_parse() {
        let config = AssemblyConfig::from_toml_str(
            "charge_port = \"wireless\"\nnotify_channel = \"sms\"\n",
        )
        .unwrap();
        assert_eq!(config.charge_port, ChargePort::Wireless);
        assert_eq!(config.notify_channel, NotifyChannel::Sms);
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config = AssemblyConfig::from_toml_str("notify_channel = \"sms\"\n").unwrap();
        assert_eq!(config.charge_port, ChargePort::Wired);
        assert_eq!(config.notify_channel, NotifyChannel::Sms);
    }

    #[test]
    fn malformed_toml_surfaces_a_config_error() {
        let err = AssemblyConfig::from_toml_str("charge_port = \"solar\"\n").unwrap_err();
        assert!(matches!(err, FacetError::Config { .. }));
    }
}

//! Unified error system for Facet core
//!
//! A single error type covers the whole workspace. The corrected capability
//! design has no runtime failure path, so the variants here exist for the
//! monolithic contrast interface and for configuration loading.

use serde::{Deserialize, Serialize};

/// Unified error type for all Facet operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum FacetError {
    /// Operation declared by an interface the entity cannot honor
    #[error("{role} does not support {operation}")]
    Unsupported {
        /// Role entity the operation was invoked on
        role: String,
        /// Operation that the entity cannot perform
        operation: String,
    },

    /// Invalid assembly configuration
    #[error("Config error: {message}")]
    Config {
        /// Error message describing the configuration problem
        message: String,
    },
}

impl FacetError {
    /// Create an unsupported-operation error
    pub fn unsupported(role: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::Unsupported {
            role: role.into(),
            operation: operation.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Standard Result type for Facet operations
pub type Result<T> = std::result::Result<T, FacetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_error_names_role_and_operation() {
        let err = FacetError::unsupported("lobby-atm", "refill");
        assert_eq!(err.to_string(), "lobby-atm does not support refill");
    }

    #[test]
    fn config_error_carries_message() {
        let err = FacetError::config("unknown key `charge_prot`");
        assert_eq!(err.to_string(), "Config error: unknown key `charge_prot`");
    }
}

//! Observable operation confirmations
//!
//! Every capability operation confirms completion by returning a [`Receipt`].
//! Receipts are the only observation channel the workspace defines: routines
//! collect them into a [`Transcript`], the demo prints them, and tests compare
//! them for the substitution and provider-swap checks.

use serde::{Deserialize, Serialize};

/// Observable record of one performed operation.
///
/// The `role` field attributes the receipt to whatever the operation is
/// allowed to reveal about its performer. Provider operations attribute the
/// concrete provider; base aviary operations attribute only the role, so a
/// caller holding the base capability cannot tell residents apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Attribution for the performed operation
    pub role: String,
    /// Name of the operation that completed
    pub operation: String,
    /// Human-readable confirmation content
    pub detail: String,
}

impl Receipt {
    /// Create a new receipt.
    pub fn new(
        role: impl Into<String>,
        operation: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            operation: operation.into(),
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for Receipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.role, self.operation, self.detail)
    }
}

/// Ordered observable output of a routine or walkthrough.
pub type Transcript = Vec<Receipt>;

//! Notification provider capability
//!
//! Consumers hold this contract by reference; the assembler in
//! `facet-assembly` decides which concrete channel satisfies it.

use crate::Receipt;

/// Provider contract for dispatching a notification.
pub trait NotifyOps: Send + Sync {
    /// Dispatch `body` over the provider's channel and confirm delivery.
    fn notify(&self, body: &str) -> Receipt;
}

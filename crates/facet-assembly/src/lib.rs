//! Facet Assembly - Binding Capabilities to Consumers
//!
//! This crate holds everything that runs against capability references
//! rather than concrete entities:
//!
//! - [`routines`]: keeper and kiosk routines written against `dyn`
//!   capability references
//! - [`consumers`]: entities that hold an abstract provider bound at
//!   construction time
//! - [`config`] and [`assembler`]: the external step that decides which
//!   concrete provider satisfies each abstract reference
//! - [`walkthrough`]: the fixed demonstration sequence over all three
//!   scenarios
//!
//! Only [`assembler`] names concrete provider types. Swapping a provider is
//! a configuration change; no consumer or routine is touched.

#![forbid(unsafe_code)]

/// External provider binding
pub mod assembler;

/// Assembly configuration
pub mod config;

/// Consumers holding abstract providers
pub mod consumers;

/// Routines written against capability references
pub mod routines;

/// The fixed demonstration sequence
pub mod walkthrough;

pub use assembler::Assembly;
pub use config::{AssemblyConfig, ChargePort, NotifyChannel};
pub use consumers::{AlertDesk, Handset};
pub use facet_core::{FacetError, Receipt, Result, Transcript};
pub use walkthrough::run_walkthrough;

//! Facet Core - Capability Contract Foundation
//!
//! This crate provides the capability trait definitions and observable
//! confirmation types for the Facet workspace. It contains only pure
//! contracts with no implementations or assembly logic.
//!
//! # Architecture Layers
//!
//! ## Capability Contracts (Pure Signatures)
//! - `CustomerOps`, `ServiceOps`: role-scoped kiosk operations
//! - `ResidentOps`, `FlightOps`: base aviary capability plus opt-in extension
//! - `ChargeOps`, `NotifyOps`: provider abstractions bound by an assembler
//!
//! ## Observable Confirmations
//! - `Receipt`: one line of observable output per performed operation
//! - `Transcript`: the ordered output of a routine or walkthrough
//!
//! Every declared operation is implementable by every declarer; the
//! contracts expose no failure path. The only fallible surface in the
//! workspace is the monolithic contrast interface in `facet-handlers`.

#![forbid(unsafe_code)]

/// Pure capability trait definitions (no implementations)
pub mod effects;

/// Unified error handling
pub mod errors;

/// Observable operation confirmations
pub mod receipt;

pub use errors::{FacetError, Result};
pub use receipt::{Receipt, Transcript};

//! Facet Testkit - Fixtures, Assertions, and Strategies
//!
//! Test infrastructure for the Facet workspace: canonical fixtures for
//! every entity and assembly, transcript assertion helpers, and proptest
//! strategies for the substitution and provider-swap checks.
//!
//! The workspace's cross-crate integration tests live in this crate's
//! `tests/` directory so that no library crate needs a dev-dependency on
//! another.

#![forbid(unsafe_code)]

/// Standard assertion helpers for tests
pub mod assertions;

/// Canonical entities and assemblies
pub mod fixtures;

/// Property test strategies
pub mod strategies;

//! Standard assertion helpers for tests
//!
//! This module provides assertion macros and helper functions that reduce
//! duplication of common transcript checks across tests.

use facet_core::Receipt;

/// Assert that a receipt carries the expected role and operation
#[macro_export]
macro_rules! assert_receipt {
    ($receipt:expr, $role:expr, $operation:expr) => {
        assert_eq!(
            ($receipt.role.as_str(), $receipt.operation.as_str()),
            ($role, $operation),
            "Receipt mismatch: {}",
            $receipt
        )
    };
}

/// Helper function to assert two transcripts are observably identical
///
/// Useful for substitution checks where a routine must not be able to tell
/// which concrete entity it was handed.
pub fn assert_same_transcript(left: &[Receipt], right: &[Receipt], context: &str) {
    assert_eq!(left, right, "Transcript mismatch ({context})");
}

/// Helper function to assert that a transcript contains a receipt for the
/// given role and operation
pub fn assert_contains_operation(transcript: &[Receipt], role: &str, operation: &str) {
    assert!(
        transcript
            .iter()
            .any(|r| r.role == role && r.operation == operation),
        "No receipt for {role}/{operation} in transcript: {transcript:?}"
    );
}

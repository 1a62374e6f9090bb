//! Structural validation of result tables.
//!
//! Catches tables that break the symmetry invariants, which can happen when a
//! table is deserialized or assembled by hand rather than through
//! [`ResultTable::set_method_stats`](crate::ResultTable::set_method_stats).
//!
//! # Examples
//!
//! ```
//! use yn00_core::*;
//!
//! let mut table = ResultTable::new();
//! table.set_method_stats("A", "B", Method::Ng86, MethodStats::new().with("dS", 0.1));
//! assert!(validate_table(&table).is_empty());
//!
//! // A self comparison is never produced by a report.
//! table.get_or_create_pair("A", "A");
//! assert!(!validate_table(&table).is_empty());
//! ```

use std::sync::Arc;

use thiserror::Error;

use crate::{Method, ResultTable};

/// Result table validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A sequence is paired with itself.
    #[error("sequence paired with itself: {0}")]
    SelfPair(String),
    /// `table[a][b]` exists but `table[b][a]` does not.
    #[error("pair {0} -> {1} has no mirrored entry")]
    MissingMirror(String, String),
    /// A method is recorded in one direction of a pair only.
    #[error("method {method} recorded for {a} -> {b} but not {b} -> {a}")]
    AsymmetricMethod { a: String, b: String, method: Method },
    /// Both directions hold the method but not the same shared statistics.
    #[error("method {method} for {a} <-> {b} is not shared between directions")]
    NotShared { a: String, b: String, method: Method },
}

/// Validates the symmetry invariants of a result table.
///
/// Each unordered pair is reported at most once per problem.
pub fn validate_table(table: &ResultTable) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (a, b, pair) in table.entries() {
        if a == b {
            errors.push(ValidationError::SelfPair(a.to_string()));
            continue;
        }

        let Some(mirror) = table.pair(b, a) else {
            errors.push(ValidationError::MissingMirror(a.to_string(), b.to_string()));
            continue;
        };

        for method in pair.methods() {
            let Some(mirrored) = mirror.get_shared(method) else {
                errors.push(ValidationError::AsymmetricMethod {
                    a: a.to_string(),
                    b: b.to_string(),
                    method,
                });
                continue;
            };
            // Only check identity once per unordered pair.
            if a < b {
                let forward = pair.get_shared(method);
                if !forward.is_some_and(|f| Arc::ptr_eq(f, mirrored)) {
                    errors.push(ValidationError::NotShared {
                        a: a.to_string(),
                        b: b.to_string(),
                        method,
                    });
                }
            }
        }
    }

    errors
}

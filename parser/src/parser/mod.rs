//! Section parsers for yn00 reports.
//!
//! A yn00 report lists pairwise estimates in three differently shaped
//! sections, each handled by its own parser:
//!
//! - [`parse_ng86`]: the Nei & Gojobori lower-triangular matrix. Declares
//!   the sequence names, in row order.
//! - [`parse_yn00`]: the Yang & Nielsen table, whose rows cite sequences
//!   by 1-based position into the names declared by the matrix.
//! - [`parse_grouped`]: the LWL85 / LWL85m / LPB93 block, where each
//!   comparison opens with a `2 (a) vs. 1 (b)` header followed by one
//!   statistics line per method.
//!
//! The parsers take pre-sliced lines and must run in that order, threading
//! the same [`ResultTable`](yn00_core::ResultTable) through all three. Each
//! can also run on its own against a pre-populated table.
//!
//! # Architecture
//!
//! Line recognition lives in `classify`: a set of pure `line -> Option<_>`
//! functions backed by the regexes below. The section parsers only hold the
//! per-section state (the growing name list, or the active pair).

mod classify;
mod grouped;
mod ng86;
mod yn00;

use regex::Regex;
use std::sync::LazyLock;

pub use classify::{
    decimal_values, is_stats_line, matrix_row_label, pair_header, stats_method,
    table_row_indices,
};
pub use grouped::{parse_grouped, parse_stats_line};
pub use ng86::{NG86_FIELDS, parse_ng86};
pub use yn00::{YN00_FIELDS, parse_yn00};

/// Regex patterns for yn00 report lines.
static PATTERNS: LazyLock<ReportPatterns> = LazyLock::new(ReportPatterns::new);

struct ReportPatterns {
    // 0.0207, -0.0000
    decimal: Regex,
    // "Pan_troglo           0.0000 (0.0000 0.0207)"
    matrix_label: Regex,
    // "   2    1    67.3   154.7 ..."
    table_row: Regex,
    // "2 (Pan_troglo) vs. 1 (Homo_sapie)"
    pair_header: Regex,
}

impl ReportPatterns {
    fn new() -> Self {
        // All regexes here are compile-time constants. An expect() failure indicates
        // a programmer error in the pattern, not a runtime condition.
        Self {
            decimal: Regex::new(r"-?\d+\.\d+").expect("static regex must compile"),
            matrix_label: Regex::new(r"^(.+?)\s{5,15}").expect("static regex must compile"),
            table_row: Regex::new(r"^\s+(\d+)\s+(\d+)").expect("static regex must compile"),
            pair_header: Regex::new(r"^\s*\d+ \((.+?)\) vs\. \d+ \((.+)\)")
                .expect("static regex must compile"),
        }
    }
}

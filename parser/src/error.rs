//! Error types for report parsing.
//!
//! [`ParseError`] covers structural problems inside a section; every variant
//! is fatal for the section being parsed. [`ReportError`] wraps those and
//! adds the failure modes of reading a whole report: I/O, missing section
//! markers and configuration decoding.

use std::path::PathBuf;

use thiserror::Error;

/// Structural errors raised by the section parsers.
///
/// Non-numeric statistic values are not errors; they are stored as
/// [`StatValue::Undefined`](yn00_core::StatValue::Undefined).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A matrix row carries a number of values that is not a multiple of
    /// three (`omega`, `dN`, `dS`).
    #[error("matrix row '{row}' has {values} values, expected groups of three")]
    IncompleteMatrixRow { row: String, values: usize },

    /// A matrix row has more column groups than there are earlier rows.
    #[error("matrix row '{row}' has {groups} column groups but only {earlier} earlier rows")]
    MatrixRowOverflow {
        row: String,
        groups: usize,
        earlier: usize,
    },

    /// A table row cites a 1-based sequence position outside the list.
    #[error("sequence index {index} out of range for {len} known sequences")]
    SequenceIndexOutOfRange { index: usize, len: usize },

    /// A table row has fewer values than the mandatory `S` through `dS`.
    #[error("table row has {found} values, expected at least 8: {line}")]
    IncompleteTableRow { line: String, found: usize },

    /// A statistics line whose key/value stream is truncated or has no
    /// method prefix.
    #[error("problem with stats line: {line:?}")]
    MalformedStatsLine { line: String },

    /// A statistics line appeared before any pair header.
    #[error("stats line outside of any pair comparison: {line:?}")]
    MissingPairContext { line: String },

    /// A pair header names a sequence that was never declared.
    #[error("unknown sequence name: {name}")]
    UnknownSequence { name: String },
}

/// Errors raised while reading a complete yn00 report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Reading the report or configuration file failed.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A section parser rejected its slice.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A section marker was not found (or not in report order).
    #[error("section {section} not found (marker {marker:?})")]
    MissingSection {
        section: &'static str,
        marker: String,
    },

    /// The Nei-Gojobori matrix declared no sequences.
    #[error("report declares no sequences")]
    NoSequences,

    /// Configuration YAML could not be decoded.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// Convenience alias; defaults to [`ParseError`].
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

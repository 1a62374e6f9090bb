//! Pairwise dN/dS extraction from PAML yn00 text reports.
//!
//! yn00 prints its pairwise estimates in three differently formatted
//! sections. This crate reads all three into a single
//! [`ResultTable`](yn00_core::ResultTable) keyed by sequence name:
//!
//! - `NG86` from the Nei & Gojobori lower-triangular matrix,
//! - `YN00` from the Yang & Nielsen table,
//! - `LWL85`, `LWL85m` and `LPB93` from the grouped comparisons.
//!
//! # Main entry points
//!
//! - [`parse_report`]: parse a complete report held in memory.
//! - [`read_report`]: read and parse a report file.
//! - [`parser::parse_ng86`], [`parser::parse_yn00`],
//!   [`parser::parse_grouped`]: run one section parser over lines the
//!   caller has already selected.
//!
//! # Example
//!
//! ```
//! use yn00_core::Method;
//! use yn00_parser::{config::ReportConfig, parse_report};
//!
//! let text = "\
//! (A) Nei-Gojobori (1986) method
//!
//! Homo_sapie          \n\
//! Pan_troglo           0.0000 (0.0000 0.0207)
//!
//! (B) Yang & Nielsen (2000) method
//!
//!    2    1    67.3   154.7   0.0136  3.6564  0.0000 -0.0000 +- 0.0000  0.0150 +- 0.0151
//!
//! (C) LWL85, LPB93 & LWLm methods
//!
//! 2 (Pan_troglo) vs. 1 (Homo_sapie)
//! LPB93:  dS =  0.0129 dN =  0.0000 w = 0.0000
//! ";
//!
//! let report = parse_report(text, &ReportConfig::default()).unwrap();
//! assert_eq!(report.sequences.len(), 2);
//!
//! let pair = report.results.pair("Homo_sapie", "Pan_troglo").unwrap();
//! assert_eq!(pair.methods().collect::<Vec<_>>(), vec![Method::Ng86, Method::Yn00, Method::Lpb93]);
//! ```

pub mod config;
pub mod error;
pub mod normalize;
pub mod output;
pub mod parser;
pub mod report;
pub mod sections;

use std::path::Path;

use tracing::debug;
use yn00_core::ResultTable;

use config::ReportConfig;
use error::ReportError;
use report::Yn00Report;

pub use error::{ParseError, Result};

/// Parses a complete yn00 report.
///
/// The text is normalized, cut into its three sections using the markers in
/// `config`, and the section parsers run in report order over one shared
/// table.
///
/// # Errors
///
/// [`ReportError::MissingSection`] when a section marker is absent,
/// [`ReportError::NoSequences`] when the matrix declares no sequences, and
/// [`ReportError::Parse`] for any structural error inside a section.
pub fn parse_report(text: &str, config: &ReportConfig) -> Result<Yn00Report, ReportError> {
    let lines = normalize::normalize_report(text, config.join_wrapped_rows);
    let sections = sections::split_sections(&lines, &config.markers)?;
    debug!(
        ng86 = sections.ng86.len(),
        yn00 = sections.yn00.len(),
        grouped = sections.grouped.len(),
        "Located report sections"
    );

    let mut results = ResultTable::new();
    let sequences = parser::parse_ng86(sections.ng86, &mut results)?;
    if sequences.is_empty() {
        return Err(ReportError::NoSequences);
    }
    parser::parse_yn00(sections.yn00, &mut results, &sequences)?;
    parser::parse_grouped(sections.grouped, &mut results)?;

    Ok(Yn00Report { sequences, results })
}

/// Reads a yn00 report file and parses it with [`parse_report`].
///
/// # Errors
///
/// [`ReportError::Io`] when the file cannot be read, plus everything
/// [`parse_report`] reports.
pub fn read_report(path: &Path, config: &ReportConfig) -> Result<Yn00Report, ReportError> {
    let text = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_report(&text, config)
}

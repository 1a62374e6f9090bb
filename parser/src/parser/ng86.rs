//! Nei & Gojobori (1986) lower-triangular matrix.
//!
//! Each labelled row names a sequence and lists one `omega (dN dS)` group per
//! earlier row:
//!
//! ```text
//! Homo_sapie
//! Pan_troglo           0.0000 (0.0000 0.0207)
//! Gorilla_go           0.0000 (0.0000 0.0207) 0.0000 (0.0000 0.0421)
//! ```
//!
//! This is the only section that declares sequence names.

use tracing::{debug, warn};
use yn00_core::{Method, MethodStats, ResultTable, SequenceList};

use super::classify::{decimal_values, matrix_row_label};
use crate::error::{ParseError, Result};

/// Statistic names of one matrix cell, in printed order.
pub const NG86_FIELDS: [&str; 3] = ["omega", "dN", "dS"];

/// Parses the matrix section, recording `NG86` statistics for every pair and
/// returning the sequence names in row order.
///
/// Lines without a row label (blank lines, the section title, notes) are
/// skipped. Every labelled row gets a table entry, even the first one, which
/// has no values.
///
/// # Errors
///
/// [`ParseError::IncompleteMatrixRow`] when a row's value count is not a
/// multiple of three, and [`ParseError::MatrixRowOverflow`] when a row has
/// more groups than earlier rows.
pub fn parse_ng86<S: AsRef<str>>(lines: &[S], results: &mut ResultTable) -> Result<SequenceList> {
    let mut sequences = SequenceList::new();

    for line in lines {
        let line = line.as_ref();
        let values = decimal_values(line);
        let Some(row_name) = matrix_row_label(line) else {
            continue;
        };

        if sequences.contains(row_name) {
            warn!(sequence = row_name, "Matrix row label declared twice");
        }
        let earlier = sequences.len();
        sequences.push(row_name);
        results.ensure_sequence(row_name);

        if values.len() % NG86_FIELDS.len() != 0 {
            return Err(ParseError::IncompleteMatrixRow {
                row: row_name.to_string(),
                values: values.len(),
            });
        }
        let groups = values.len() / NG86_FIELDS.len();
        if groups > earlier {
            return Err(ParseError::MatrixRowOverflow {
                row: row_name.to_string(),
                groups,
                earlier,
            });
        }

        for (column, cell) in values.chunks_exact(NG86_FIELDS.len()).enumerate() {
            let stats: MethodStats = NG86_FIELDS.into_iter().zip(cell.iter().copied()).collect();
            let column_name = &sequences.as_slice()[column];
            results.set_method_stats(row_name, column_name, Method::Ng86, stats);
        }
    }

    debug!(sequences = sequences.len(), "Parsed NG86 matrix");
    Ok(sequences)
}

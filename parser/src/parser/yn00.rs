//! Yang & Nielsen (2000) table.
//!
//! ```text
//! seq. seq.     S       N        t   kappa   omega     dN +- SE    dS +- SE
//!
//!    2    1    67.3   154.7   0.0136  3.6564  0.0000 -0.0000 +- 0.0000  0.0150 +- 0.0151
//! ```
//!
//! Rows cite sequences by 1-based position into the names declared by the
//! matrix section.

use tracing::{debug, warn};
use yn00_core::{Method, MethodStats, ResultTable, SequenceList};

use super::classify::{decimal_values, table_row_indices};
use crate::error::{ParseError, Result};

/// Statistic names of a table row, in printed order.
pub const YN00_FIELDS: [&str; 9] = ["S", "N", "t", "kappa", "omega", "dN", "dN SE", "dS", "dS SE"];

/// Values up to and including `dS`. The trailing `dS SE` is wrapped onto
/// its own line by some yn00 builds.
const REQUIRED_FIELDS: usize = 8;

/// Parses the table section, recording `YN00` statistics for every row.
///
/// Only lines opening with two indices are rows; anything else (headers,
/// references, stray continuation values) is ignored. A row's decimal values
/// are assigned positionally to [`YN00_FIELDS`]. When `dS SE` is absent the
/// key is left out.
///
/// # Errors
///
/// [`ParseError::SequenceIndexOutOfRange`] when an index does not resolve
/// against `sequences`, and [`ParseError::IncompleteTableRow`] when a row has
/// fewer than eight values.
pub fn parse_yn00<S: AsRef<str>>(
    lines: &[S],
    results: &mut ResultTable,
    sequences: &SequenceList,
) -> Result<()> {
    let mut rows = 0usize;

    for line in lines {
        let line = line.as_ref();
        let values = decimal_values(line);
        let Some((first, second)) = table_row_indices(line) else {
            continue;
        };

        let first_name = resolve(sequences, first)?;
        let second_name = resolve(sequences, second)?;

        if values.len() < REQUIRED_FIELDS {
            return Err(ParseError::IncompleteTableRow {
                line: line.trim().to_string(),
                found: values.len(),
            });
        }
        if values.len() == REQUIRED_FIELDS {
            warn!(
                first = first_name,
                second = second_name,
                "Table row has no dS SE value"
            );
        }

        let stats: MethodStats = YN00_FIELDS.into_iter().zip(values).collect();
        results.set_method_stats(first_name, second_name, Method::Yn00, stats);
        rows += 1;
    }

    debug!(rows, "Parsed YN00 table");
    Ok(())
}

fn resolve(sequences: &SequenceList, index: usize) -> Result<&str> {
    sequences
        .get(index)
        .ok_or(ParseError::SequenceIndexOutOfRange {
            index,
            len: sequences.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> SequenceList {
        list.iter().copied().collect()
    }

    #[test]
    fn test_row_without_wrapped_value() {
        let mut results = ResultTable::new();
        let sequences = names(&["A", "B"]);
        parse_yn00(
            &["   2    1    67.3   154.7   0.0136  3.6564  0.0000 -0.0000 +- 0.0000  0.0150"],
            &mut results,
            &sequences,
        )
        .unwrap();

        let stats = results.method_stats("B", "A", Method::Yn00).unwrap();
        assert_eq!(stats.value("S"), Some(67.3));
        assert_eq!(stats.value("N"), Some(154.7));
        assert_eq!(stats.value("t"), Some(0.0136));
        assert_eq!(stats.value("kappa"), Some(3.6564));
        assert_eq!(stats.value("omega"), Some(0.0));
        assert_eq!(stats.value("dN"), Some(-0.0));
        assert_eq!(stats.value("dN SE"), Some(0.0));
        assert_eq!(stats.value("dS"), Some(0.015));
        assert!(!stats.contains_key("dS SE"));
        assert!(std::ptr::eq(
            stats,
            results.method_stats("A", "B", Method::Yn00).unwrap()
        ));
    }

    #[test]
    fn test_joined_row_fills_all_fields() {
        let mut results = ResultTable::new();
        let sequences = names(&["A", "B", "C"]);
        parse_yn00(
            &[
                "seq. seq.     S       N        t   kappa   omega     dN +- SE    dS +- SE",
                "",
                "   3    2    67.3   154.7   0.0138  3.6564  0.0000 -0.0000 +- 0.0000  0.0152 +- 0.0153",
            ],
            &mut results,
            &sequences,
        )
        .unwrap();

        let stats = results.method_stats("C", "B", Method::Yn00).unwrap();
        assert_eq!(stats.len(), YN00_FIELDS.len());
        assert_eq!(stats.value("dS SE"), Some(0.0153));
        assert!(results.pair("A", "B").is_none());
    }

    #[test]
    fn test_continuation_line_is_ignored() {
        let mut results = ResultTable::new();
        let sequences = names(&["A", "B"]);
        parse_yn00(&["+- 0.0151", "   0.0151"], &mut results, &sequences).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_out_of_range_index_is_fatal() {
        let mut results = ResultTable::new();
        let sequences = names(&["A", "B"]);
        let err = parse_yn00(
            &["   3    1    67.3   154.7   0.0136  3.6564  0.0000 -0.0000 +- 0.0000  0.0150 +- 0.0151"],
            &mut results,
            &sequences,
        )
        .unwrap_err();
        assert_eq!(err, ParseError::SequenceIndexOutOfRange { index: 3, len: 2 });
    }

    #[test]
    fn test_zero_index_is_fatal() {
        let mut results = ResultTable::new();
        let sequences = names(&["A", "B"]);
        let err = parse_yn00(&["   0    1    67.3"], &mut results, &sequences).unwrap_err();
        assert_eq!(err, ParseError::SequenceIndexOutOfRange { index: 0, len: 2 });
    }

    #[test]
    fn test_short_row_is_fatal() {
        let mut results = ResultTable::new();
        let sequences = names(&["A", "B"]);
        let err = parse_yn00(&["   2    1    67.3   154.7"], &mut results, &sequences).unwrap_err();
        assert!(matches!(err, ParseError::IncompleteTableRow { found: 2, .. }));
    }

    #[test]
    fn test_adds_to_existing_pair_entry() {
        let mut results = ResultTable::new();
        results.set_method_stats("B", "A", Method::Ng86, MethodStats::new().with("dS", 0.0207));
        let sequences = names(&["A", "B"]);
        parse_yn00(
            &["   2    1    67.3   154.7   0.0136  3.6564  0.0000 -0.0000 +- 0.0000  0.0150 +- 0.0151"],
            &mut results,
            &sequences,
        )
        .unwrap();

        let pair = results.pair("A", "B").unwrap();
        assert_eq!(pair.methods().collect::<Vec<_>>(), vec![Method::Ng86, Method::Yn00]);
    }
}

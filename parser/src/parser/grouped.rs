//! LWL85, LWL85m and LPB93 comparisons.
//!
//! Each comparison opens with a header naming both sequences, followed by
//! intermediate per-class lines and one summary line per method:
//!
//! ```text
//! 2 (Pan_troglo) vs. 1 (Homo_sapie)
//!
//! L(i):      143.0      51.0      28.0  sum=    222.0
//! Ns(i):    0.0000    1.0000    0.0000  sum=   1.0000
//! LWL85:  dS =  0.0227 dN =  0.0000 w = 0.0000 S =   45.0 N =  177.0
//! LWL85m: dS =    -nan dN =    -nan w =   -nan S =   -nan N =   -nan (rho = -nan)
//! LPB93:  dS =  0.0129 dN =  0.0000 w = 0.0000
//! ```

use tracing::debug;
use yn00_core::{MethodStats, ResultTable, StatValue};

use super::classify::{is_stats_line, pair_header, stats_method};
use crate::error::{ParseError, Result};

/// Where the parser stands relative to the comparison headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PairContext<'a> {
    /// No header seen yet.
    SeekingHeader,
    /// Summary lines belong to this pair until the next header.
    WithinPair { first: &'a str, second: &'a str },
}

impl<'a> PairContext<'a> {
    /// Returns the active pair for a statistics line, rejecting lines that
    /// arrive before any header.
    fn active_pair(self, line: &str) -> Result<(&'a str, &'a str)> {
        match self {
            PairContext::WithinPair { first, second } => Ok((first, second)),
            PairContext::SeekingHeader => Err(ParseError::MissingPairContext {
                line: line.to_string(),
            }),
        }
    }
}

/// Parses the grouped-methods section, recording one entry per method
/// summary line under the pair named by the preceding header.
///
/// Lines that are neither headers nor summary lines are skipped. Summary
/// lines for a method other than `LWL85`, `LWL85m` or `LPB93` are skipped as
/// well.
///
/// # Errors
///
/// [`ParseError::MissingPairContext`] for a summary line before any header,
/// [`ParseError::MalformedStatsLine`] for a truncated summary line, and
/// [`ParseError::UnknownSequence`] when a header names a sequence missing
/// from `results`.
pub fn parse_grouped<S: AsRef<str>>(lines: &[S], results: &mut ResultTable) -> Result<()> {
    let mut context = PairContext::SeekingHeader;
    let mut recorded = 0usize;

    for line in lines {
        let line = line.as_ref();
        if let Some((first, second)) = pair_header(line) {
            context = PairContext::WithinPair { first, second };
            continue;
        }
        if !is_stats_line(line) {
            continue;
        }

        let (first, second) = context.active_pair(line)?;
        let stats = parse_stats_line(line)?;
        let Some(method) = stats_method(line) else {
            debug!(line, "Skipping stats line for unrecognised method");
            continue;
        };

        for name in [first, second] {
            if !results.contains_sequence(name) {
                return Err(ParseError::UnknownSequence {
                    name: name.to_string(),
                });
            }
        }
        results.set_method_stats(first, second, method, stats);
        recorded += 1;
    }

    debug!(recorded, "Parsed LWL85/LWL85m/LPB93 comparisons");
    Ok(())
}

/// Parses the `key = value` triples that follow the first colon of a
/// summary line.
///
/// Parentheses around keys and values are dropped, `w` is renamed to
/// `omega`, and values that are not numbers become
/// [`StatValue::Undefined`].
///
/// # Errors
///
/// [`ParseError::MalformedStatsLine`] when the line has no colon or its last
/// triple is missing the value.
pub fn parse_stats_line(line: &str) -> Result<MethodStats> {
    let malformed = || ParseError::MalformedStatsLine {
        line: line.to_string(),
    };

    let (_, body) = line.split_once(':').ok_or_else(malformed)?;
    let tokens: Vec<&str> = body.split_whitespace().collect();

    let mut stats = MethodStats::new();
    for triple in tokens.chunks(3) {
        let [key, _, value] = triple else {
            return Err(malformed());
        };
        let key = match key.trim_matches(is_paren) {
            "w" => "omega",
            other => other,
        };
        stats.insert(key, StatValue::parse(value.trim_matches(is_paren)));
    }
    Ok(stats)
}

fn is_paren(ch: char) -> bool {
    ch == '(' || ch == ')'
}

//! Line classifiers for the three report layouts.
//!
//! Each function looks at a single line and either recognises it or returns
//! `None`/`false`. None of them keep state.

use yn00_core::Method;

use super::PATTERNS;

/// Marker that identifies a method summary line in the grouped section.
const STATS_MARKER: &str = "dS =";

/// Extracts every decimal number (`-?\d+\.\d+`) in left-to-right order.
///
/// Integers are not decimals, so the 1-based indices that open a table row
/// are not returned.
pub fn decimal_values(line: &str) -> Vec<f64> {
    PATTERNS
        .decimal
        .find_iter(line)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Returns the row label of a matrix line: the trimmed text before the first
/// run of 5 to 15 whitespace characters.
///
/// Shorter runs of spaces are part of the label. Lines without such a run,
/// or whose label would be blank, carry no label.
pub fn matrix_row_label(line: &str) -> Option<&str> {
    let caps = PATTERNS.matrix_label.captures(line)?;
    let label = caps.get(1)?.as_str().trim();
    (!label.is_empty()).then_some(label)
}

/// Returns the two 1-based sequence positions opening a table row.
///
/// A row must start with whitespace followed by two unsigned integers.
pub fn table_row_indices(line: &str) -> Option<(usize, usize)> {
    let caps = PATTERNS.table_row.captures(line)?;
    let first = caps.get(1)?.as_str().parse().ok()?;
    let second = caps.get(2)?.as_str().parse().ok()?;
    Some((first, second))
}

/// Returns the two sequence names of a `<n> (<name>) vs. <m> (<name>)`
/// comparison header. The leading numbers are ignored.
pub fn pair_header(line: &str) -> Option<(&str, &str)> {
    let caps = PATTERNS.pair_header.captures(line)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Returns `true` for method summary lines of the grouped section.
pub fn is_stats_line(line: &str) -> bool {
    line.contains(STATS_MARKER)
}

/// Classifies a statistics line by method.
///
/// `LWL85m` is checked before `LWL85` since the former contains the latter.
pub fn stats_method(line: &str) -> Option<Method> {
    [Method::Lwl85m, Method::Lwl85, Method::Lpb93]
        .into_iter()
        .find(|method| line.contains(method.label()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_values_in_matrix_row() {
        let values = decimal_values("Gorilla_go           0.0000 (0.0000 0.0207) -1.0000 (0.0100 -1.0000)");
        assert_eq!(values, vec![0.0, 0.0, 0.0207, -1.0, 0.01, -1.0]);
    }

    #[test]
    fn test_decimal_values_skip_integers() {
        let values = decimal_values("   2    1    67.3   154.7   0.0136");
        assert_eq!(values, vec![67.3, 154.7, 0.0136]);
    }

    #[test]
    fn test_matrix_row_label() {
        assert_eq!(
            matrix_row_label("Pan_troglo           0.0000 (0.0000 0.0207)"),
            Some("Pan_troglo")
        );
        assert_eq!(matrix_row_label("Homo_sapie          "), Some("Homo_sapie"));
        assert_eq!(
            matrix_row_label("Homo  sapiens        0.0000 (0.0000 0.0207)"),
            Some("Homo  sapiens")
        );
    }

    #[test]
    fn test_matrix_row_label_rejects_unpadded_lines() {
        assert_eq!(matrix_row_label(""), None);
        assert_eq!(matrix_row_label("Nei & Gojobori 1986. dN/dS (dN, dS)"), None);
        assert_eq!(matrix_row_label("Use runmode = -2 for ML pairwise comparison.)"), None);
        assert_eq!(matrix_row_label("                    "), None);
    }

    #[test]
    fn test_table_row_indices() {
        assert_eq!(
            table_row_indices("   2    1    67.3   154.7   0.0136  3.6564  0.0000 -0.0000 +- 0.0000  0.0150"),
            Some((2, 1))
        );
        assert_eq!(
            table_row_indices("seq. seq.     S       N        t   kappa   omega     dN +- SE    dS +- SE"),
            None
        );
        assert_eq!(table_row_indices("+- 0.0151"), None);
        assert_eq!(table_row_indices("   0.0151"), None);
        assert_eq!(table_row_indices("2    1    67.3"), None);
    }

    #[test]
    fn test_pair_header() {
        assert_eq!(
            pair_header("2 (Pan_troglo) vs. 1 (Homo_sapie)"),
            Some(("Pan_troglo", "Homo_sapie"))
        );
        assert_eq!(pair_header("L(i):      143.0      51.0      28.0  sum=    222.0"), None);
        assert_eq!(
            pair_header("LWL85:  dS =  0.0227 dN =  0.0000 w = 0.0000 S =   45.0 N =  177.0"),
            None
        );
    }

    #[test]
    fn test_stats_line_detection() {
        assert!(is_stats_line("LPB93:  dS =  0.0129 dN =  0.0000 w = 0.0000"));
        assert!(!is_stats_line("Ns(i):    0.0000    1.0000    0.0000  sum=   1.0000"));
    }

    #[test]
    fn test_stats_method_prefers_lwl85m() {
        assert_eq!(
            stats_method("LWL85m: dS =    -nan dN =    -nan w =   -nan"),
            Some(Method::Lwl85m)
        );
        assert_eq!(stats_method("LWL85:  dS =  0.0227"), Some(Method::Lwl85));
        assert_eq!(stats_method("LPB93:  dS =  0.0129"), Some(Method::Lpb93));
        assert_eq!(stats_method("ML:  dS =  0.0129"), None);
    }
}

//! Whole-report results.

use serde::{Deserialize, Serialize};
use yn00_core::{Method, MethodStats, ResultTable, SequenceList};

/// Everything read from one yn00 report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Yn00Report {
    /// Sequence names in matrix row order.
    pub sequences: SequenceList,
    /// Pairwise statistics keyed by sequence, partner and method.
    pub results: ResultTable,
}

impl Yn00Report {
    /// Iterates every unordered pair once, first sequence before second in
    /// declaration order, with the statistics of each recorded method.
    pub fn comparisons(&self) -> impl Iterator<Item = (&str, &str, Method, &MethodStats)> {
        let names = self.sequences.as_slice();
        names.iter().enumerate().flat_map(move |(i, first)| {
            names[i + 1..].iter().flat_map(move |second| {
                self.results
                    .pair(first, second)
                    .into_iter()
                    .flat_map(|pair| pair.iter())
                    .map(move |(method, stats)| (first.as_str(), second.as_str(), method, stats))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparisons_visit_each_pair_once() {
        let mut report = Yn00Report {
            sequences: ["A", "B", "C"].into_iter().collect(),
            results: ResultTable::new(),
        };
        report
            .results
            .set_method_stats("B", "A", Method::Ng86, MethodStats::new().with("dS", 0.1));
        report
            .results
            .set_method_stats("C", "A", Method::Ng86, MethodStats::new().with("dS", 0.2));
        report
            .results
            .set_method_stats("A", "C", Method::Lpb93, MethodStats::new().with("dS", 0.3));

        let seen: Vec<_> = report
            .comparisons()
            .map(|(a, b, method, _)| (a, b, method))
            .collect();
        assert_eq!(
            seen,
            vec![
                ("A", "B", Method::Ng86),
                ("A", "C", Method::Ng86),
                ("A", "C", Method::Lpb93),
            ]
        );
    }
}

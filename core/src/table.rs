//! Symmetric pairwise result table.
//!
//! [`ResultTable`] maps a sequence name to every partner it has been compared
//! with, and each partner to a [`PairResult`] holding one entry per method.
//! All writes go through [`ResultTable::set_method_stats`], which stores a
//! single shared [`MethodStats`] under both directions of the pair.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::types::{Method, MethodStats};

/// Per-method statistics recorded for one ordered pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairResult(BTreeMap<Method, Arc<MethodStats>>);

impl PairResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, method: Method) -> Option<&MethodStats> {
        self.0.get(&method).map(Arc::as_ref)
    }

    /// Returns the shared handle so callers can check identity with the
    /// mirrored entry.
    pub fn get_shared(&self, method: Method) -> Option<&Arc<MethodStats>> {
        self.0.get(&method)
    }

    pub fn contains(&self, method: Method) -> bool {
        self.0.contains_key(&method)
    }

    pub fn methods(&self) -> impl Iterator<Item = Method> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Method, &MethodStats)> {
        self.0.iter().map(|(m, s)| (*m, s.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, method: Method, stats: Arc<MethodStats>) {
        self.0.insert(method, stats);
    }
}

/// Pairwise results keyed by sequence name, then by partner name.
///
/// The table is symmetric by construction: for every pair written through
/// [`set_method_stats`](ResultTable::set_method_stats), `table[a][b]` and
/// `table[b][a]` hold the same `Arc` for that method. Keys are only ever
/// added.
///
/// # Examples
///
/// ```
/// use yn00_core::{Method, MethodStats, ResultTable};
///
/// let mut table = ResultTable::new();
/// table.ensure_sequence("Homo_sapie");
/// table.ensure_sequence("Pan_troglo");
///
/// let stats = MethodStats::new().with("omega", 0.0).with("dN", 0.0).with("dS", 0.0207);
/// table.set_method_stats("Pan_troglo", "Homo_sapie", Method::Ng86, stats);
///
/// let forward = table.method_stats("Pan_troglo", "Homo_sapie", Method::Ng86).unwrap();
/// let reverse = table.method_stats("Homo_sapie", "Pan_troglo", Method::Ng86).unwrap();
/// assert!(std::ptr::eq(forward, reverse));
/// assert_eq!(table.pair_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultTable(BTreeMap<String, BTreeMap<String, PairResult>>);

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the top-level entry for a sequence if it is absent.
    pub fn ensure_sequence(&mut self, name: &str) {
        if !self.0.contains_key(name) {
            self.0.insert(name.to_string(), BTreeMap::new());
        }
    }

    pub fn contains_sequence(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the `a -> b` entry, creating both `a -> b` and `b -> a` (and
    /// the sequences themselves) when missing.
    pub fn get_or_create_pair(&mut self, a: &str, b: &str) -> &mut PairResult {
        self.0
            .entry(b.to_string())
            .or_default()
            .entry(a.to_string())
            .or_default();
        self.0
            .entry(a.to_string())
            .or_default()
            .entry(b.to_string())
            .or_default()
    }

    /// Records one method's statistics for a pair, in both directions.
    ///
    /// Both `self[a][b]` and `self[b][a]` receive the same `Arc`. A later
    /// write for the same method replaces the earlier one; writes for other
    /// methods are left untouched.
    pub fn set_method_stats(&mut self, a: &str, b: &str, method: Method, stats: MethodStats) {
        let shared = Arc::new(stats);
        self.get_or_create_pair(b, a).insert(method, Arc::clone(&shared));
        self.get_or_create_pair(a, b).insert(method, shared);
    }

    pub fn pair(&self, a: &str, b: &str) -> Option<&PairResult> {
        self.0.get(a).and_then(|partners| partners.get(b))
    }

    pub fn method_stats(&self, a: &str, b: &str, method: Method) -> Option<&MethodStats> {
        self.pair(a, b).and_then(|pair| pair.get(method))
    }

    /// Iterates the partners recorded for `name`, in name order.
    pub fn partners(&self, name: &str) -> impl Iterator<Item = (&str, &PairResult)> {
        self.0
            .get(name)
            .into_iter()
            .flat_map(|partners| partners.iter().map(|(k, v)| (k.as_str(), v)))
    }

    /// Iterates every sequence key, in name order.
    pub fn sequences(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates every ordered entry `(a, b, pair)`; each unordered pair
    /// appears twice.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &PairResult)> {
        self.0.iter().flat_map(|(a, partners)| {
            partners
                .iter()
                .map(move |(b, pair)| (a.as_str(), b.as_str(), pair))
        })
    }

    /// Number of sequences with a top-level entry.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of unordered pairs with at least one entry.
    pub fn pair_count(&self) -> usize {
        self.entries().filter(|(a, b, _)| a < b).count()
            + self.entries().filter(|(a, b, _)| a == b).count()
    }
}

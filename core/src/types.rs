//! Value types for pairwise evolutionary statistics.
//!
//! This module defines the leaf types of the data model: the ordered list of
//! sequence names declared by a report, a single statistic value that may be
//! undefined, the per-method statistics map, and the estimation methods a
//! yn00 report covers. The types are designed for serialization with
//! [`serde`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordered, append-only list of sequence names.
///
/// Names are declared once, in row order, by the Nei-Gojobori matrix. Their
/// position is the only link between the name-based sections of a report and
/// the index-based Yang-Nielsen table, whose rows cite sequences by 1-based
/// position.
///
/// # Examples
///
/// ```
/// use yn00_core::SequenceList;
///
/// let mut sequences = SequenceList::new();
/// sequences.push("Homo_sapie");
/// sequences.push("Pan_troglo");
///
/// assert_eq!(sequences.get(1), Some("Homo_sapie"));
/// assert_eq!(sequences.get(2), Some("Pan_troglo"));
/// assert_eq!(sequences.get(0), None);
/// assert_eq!(sequences.get(3), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SequenceList(Vec<String>);

impl SequenceList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sequence name.
    pub fn push(&mut self, name: impl Into<String>) {
        self.0.push(name.into());
    }

    /// Returns the name at a 1-based position, as cited by the Yang-Nielsen
    /// table. Position 0 is never valid.
    pub fn get(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|idx| self.0.get(idx))
            .map(String::as_str)
    }

    /// Returns `true` if the name has been declared.
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    /// Returns the 0-based position of a name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for SequenceList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A single statistic as reported by yn00.
///
/// Degenerate comparisons make yn00 print `nan`/`-nan` in place of a number.
/// Those are kept as [`StatValue::Undefined`] so consumers can tell
/// "not computable" apart from "computed as zero". Serializes as a JSON
/// number or `null`.
///
/// # Examples
///
/// ```
/// use yn00_core::StatValue;
///
/// assert_eq!(StatValue::parse("0.0227"), StatValue::Value(0.0227));
/// assert_eq!(StatValue::parse("-nan"), StatValue::Undefined);
/// assert_eq!(StatValue::parse("n/a"), StatValue::Undefined);
/// assert!(StatValue::Undefined.as_f64().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    /// A finite or infinite numeric value.
    Value(f64),
    /// The report printed a non-numeric token for this statistic.
    Undefined,
}

impl StatValue {
    /// Parses a report token. Anything that is not a number, including
    /// tokens Rust would read as NaN, becomes [`StatValue::Undefined`].
    pub fn parse(token: &str) -> Self {
        match token.parse::<f64>() {
            Ok(value) => Self::from(value),
            Err(_) => Self::Undefined,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Undefined => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}

impl From<f64> for StatValue {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Self::Undefined
        } else {
            Self::Value(value)
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::Undefined => f.write_str("NA"),
        }
    }
}

/// Statistics produced by one method for one pair of sequences.
///
/// Keys are the statistic names used by the report (`omega`, `dN`, `dS`,
/// `S`, `N`, `t`, `kappa`, `dN SE`, `dS SE`, `rho`, ...). Iteration is in key
/// order.
///
/// # Examples
///
/// ```
/// use yn00_core::{MethodStats, StatValue};
///
/// let stats = MethodStats::new()
///     .with("omega", 0.0)
///     .with("dN", 0.0)
///     .with("dS", 0.0207);
///
/// assert_eq!(stats.value("dS"), Some(0.0207));
/// assert_eq!(stats.get("kappa"), None);
/// assert_eq!(stats.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MethodStats(BTreeMap<String, StatValue>);

impl MethodStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a statistic, replacing any earlier value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StatValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder form of [`insert`](MethodStats::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StatValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<StatValue> {
        self.0.get(key).copied()
    }

    /// Returns the numeric value of a statistic; `None` when the key is
    /// missing or the value is undefined.
    pub fn value(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(|v| v.as_f64())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, StatValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` when every statistic is undefined (and there is at
    /// least one).
    pub fn is_all_undefined(&self) -> bool {
        !self.0.is_empty() && self.0.values().all(StatValue::is_undefined)
    }
}

impl<K: Into<String>, V: Into<StatValue>> FromIterator<(K, V)> for MethodStats {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Estimation method a set of statistics came from.
///
/// Serializes as the label yn00 prints (`NG86`, `YN00`, `LWL85`, `LWL85m`,
/// `LPB93`).
///
/// # Examples
///
/// ```
/// use yn00_core::Method;
///
/// assert_eq!(Method::Lwl85m.label(), "LWL85m");
/// assert_eq!("LPB93".parse::<Method>(), Ok(Method::Lpb93));
/// assert!("ML".parse::<Method>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Nei & Gojobori (1986), the lower-triangular matrix section.
    #[serde(rename = "NG86")]
    Ng86,
    /// Yang & Nielsen (2000), the indexed table section.
    #[serde(rename = "YN00")]
    Yn00,
    /// Li, Wu & Luo (1985).
    #[serde(rename = "LWL85")]
    Lwl85,
    /// Modified LWL85.
    #[serde(rename = "LWL85m")]
    Lwl85m,
    /// Li (1993) / Pamilo & Bianchi (1993).
    #[serde(rename = "LPB93")]
    Lpb93,
}

impl Method {
    /// All methods in report order.
    pub const ALL: [Method; 5] = [
        Method::Ng86,
        Method::Yn00,
        Method::Lwl85,
        Method::Lwl85m,
        Method::Lpb93,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Method::Ng86 => "NG86",
            Method::Yn00 => "YN00",
            Method::Lwl85 => "LWL85",
            Method::Lwl85m => "LWL85m",
            Method::Lpb93 => "LPB93",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a method label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown method label: {0}")]
pub struct UnknownMethod(pub String);

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.label() == s)
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

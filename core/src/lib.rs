//! Core data model for pairwise dN/dS results read from PAML yn00 reports.
//!
//! This crate defines the structures the report parser accumulates into:
//!
//! - [`SequenceList`]: the ordered sequence names declared by a report.
//! - [`StatValue`]: one statistic, possibly undefined (`nan` in the report).
//! - [`MethodStats`]: the statistics one method produced for one pair.
//! - [`Method`]: the five estimation methods (`NG86`, `YN00`, `LWL85`,
//!   `LWL85m`, `LPB93`).
//! - [`PairResult`] and [`ResultTable`]: results keyed by sequence name,
//!   then partner name, then method.
//!
//! Validation ([`validate_table`]) checks the symmetry invariants of a
//! table.
//!
//! # Example
//!
//! ```
//! use yn00_core::*;
//!
//! let mut table = ResultTable::new();
//! table.set_method_stats(
//!     "Pan_troglo",
//!     "Homo_sapie",
//!     Method::Lwl85m,
//!     MethodStats::new().with("dS", StatValue::Undefined).with("dN", StatValue::Undefined),
//! );
//!
//! let stats = table.method_stats("Homo_sapie", "Pan_troglo", Method::Lwl85m).unwrap();
//! assert!(stats.is_all_undefined());
//! assert!(validate_table(&table).is_empty());
//! ```

mod table;
mod types;
mod validate;

pub use table::{PairResult, ResultTable};
pub use types::*;
pub use validate::{ValidationError, validate_table};

//! Report reading configuration.
//!
//! Controls how a raw yn00 report is cut into sections and whether wrapped
//! table rows are re-joined before parsing. Every field has a default that
//! matches the reports written by PAML's yn00, so an empty document is a
//! valid configuration.
//!
//! # Example YAML
//!
//! ```yaml
//! markers:
//!   ng86: "(A) Nei-Gojobori (1986) method"
//!   yn00: "(B) Yang & Nielsen (2000) method"
//!   grouped: "(C) LWL85, LPB93 & LWLm methods"
//! join_wrapped_rows: true
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Substrings that open each section of a report.
///
/// # Examples
///
/// ```
/// # use yn00_parser::config::SectionMarkers;
/// let markers = SectionMarkers::default();
/// assert!(markers.ng86.contains("Nei-Gojobori"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionMarkers {
    /// Opens the Nei & Gojobori matrix.
    pub ng86: String,
    /// Opens the Yang & Nielsen table.
    pub yn00: String,
    /// Opens the LWL85 / LWL85m / LPB93 comparisons.
    pub grouped: String,
}

impl Default for SectionMarkers {
    fn default() -> Self {
        Self {
            ng86: "(A) Nei-Gojobori (1986) method".to_string(),
            yn00: "(B) Yang & Nielsen (2000) method".to_string(),
            grouped: "(C) LWL85, LPB93 & LWLm methods".to_string(),
        }
    }
}

/// Top-level report reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub markers: SectionMarkers,
    /// Append lines starting with `+-` to the preceding line.
    pub join_wrapped_rows: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            markers: SectionMarkers::default(),
            join_wrapped_rows: true,
        }
    }
}

impl ReportConfig {
    /// Decodes a configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ReportError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let file = File::open(path).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_yaml::from_reader(BufReader::new(file))?)
    }
}

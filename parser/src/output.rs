//! Output formatting for parsed reports.

use crate::report::Yn00Report;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    /// Tab-separated, one statistic per line.
    Table,
}

/// Formats a parsed report in the requested output format.
pub fn format_report(report: &Yn00Report, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(report).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Table => Ok(report_to_table(report)),
    }
}

fn report_to_table(report: &Yn00Report) -> String {
    let mut out = String::from("seq1\tseq2\tmethod\tstatistic\tvalue\n");
    for (first, second, method, stats) in report.comparisons() {
        for (key, value) in stats.iter() {
            out.push_str(&format!("{first}\t{second}\t{method}\t{key}\t{value}\n"));
        }
    }
    out
}

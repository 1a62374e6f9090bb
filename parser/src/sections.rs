//! Locating the three result sections of a report.

use crate::config::SectionMarkers;
use crate::error::ReportError;

/// The line slices handed to each section parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSections<'a, S> {
    /// Between the NG86 marker and the YN00 marker.
    pub ng86: &'a [S],
    /// Between the YN00 marker and the grouped-methods marker.
    pub yn00: &'a [S],
    /// After the grouped-methods marker.
    pub grouped: &'a [S],
}

/// Cuts a report into its three result sections.
///
/// Markers are matched as substrings and must appear in report order. The
/// marker lines themselves belong to no section.
///
/// # Errors
///
/// [`ReportError::MissingSection`] when a marker is absent, or only appears
/// before the preceding section's marker.
pub fn split_sections<'a, S: AsRef<str>>(
    lines: &'a [S],
    markers: &SectionMarkers,
) -> Result<ReportSections<'a, S>, ReportError> {
    let ng86_at = find_marker(lines, 0, "NG86", &markers.ng86)?;
    let yn00_at = find_marker(lines, ng86_at + 1, "YN00", &markers.yn00)?;
    let grouped_at = find_marker(lines, yn00_at + 1, "LWL85/LPB93", &markers.grouped)?;

    Ok(ReportSections {
        ng86: &lines[ng86_at + 1..yn00_at],
        yn00: &lines[yn00_at + 1..grouped_at],
        grouped: &lines[grouped_at + 1..],
    })
}

fn find_marker<S: AsRef<str>>(
    lines: &[S],
    from: usize,
    section: &'static str,
    marker: &str,
) -> Result<usize, ReportError> {
    lines
        .iter()
        .skip(from)
        .position(|line| line.as_ref().contains(marker))
        .map(|offset| from + offset)
        .ok_or_else(|| ReportError::MissingSection {
            section,
            marker: marker.to_string(),
        })
}

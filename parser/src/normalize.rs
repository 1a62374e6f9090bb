//! Report text normalization.

/// Splits a raw report into lines, unifying line endings and optionally
/// re-joining wrapped table rows.
///
/// Some yn00 builds break the `dS +- SE` column of the Yang & Nielsen table
/// onto its own line (`+- 0.0151`). With `join_wrapped_rows`, such a line is
/// appended to the previous non-empty line so each table row is complete.
/// Trailing whitespace is kept: the first matrix row is only recognisable
/// by the padding after its label.
pub fn normalize_report(raw: &str, join_wrapped_rows: bool) -> Vec<String> {
    let replaced = raw.replace("\r\n", "\n").replace('\r', "\n");

    let mut normalized: Vec<String> = Vec::new();
    for line in replaced.lines() {
        let trimmed = line.trim();
        let is_wrapped_continuation = join_wrapped_rows
            && trimmed.starts_with("+-")
            && normalized
                .last()
                .is_some_and(|prev| !prev.trim().is_empty());

        if is_wrapped_continuation {
            if let Some(prev) = normalized.last_mut() {
                prev.truncate(prev.trim_end().len());
                prev.push(' ');
                prev.push_str(trimmed);
            }
            continue;
        }

        normalized.push(line.to_string());
    }

    normalized
}

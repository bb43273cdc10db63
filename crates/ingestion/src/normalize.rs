//! Numeric column normalization.
//!
//! Strips currency formatting from string-encoded numeric cells and coerces
//! them to finite floats. Parse failures fall back to 0.0 and are reported
//! through a warning side channel; the normalizer itself never fails.

/// Result of normalizing one column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedColumn {
    /// One finite float per input cell, same length and order.
    pub values: Vec<f64>,
    /// Row indices whose non-empty cells failed to parse (fell back to 0.0).
    /// Genuinely empty cells are not reported.
    pub failed_rows: Vec<usize>,
}

/// Remove literal currency formatting: `$` and thousands separators.
fn clean(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Normalize a single cell. Returns the value and whether it fell back.
pub fn normalize_value(raw: &str) -> (f64, bool) {
    let cleaned = clean(raw);
    if cleaned.is_empty() {
        return (0.0, false);
    }
    match cleaned.parse::<f64>() {
        // NaN and infinities would poison every cumulative sum downstream.
        Ok(v) if v.is_finite() => (v, false),
        _ => (0.0, true),
    }
}

/// Normalize a whole column, collecting the failed row indices.
pub fn normalize_column(raw: &[String]) -> NormalizedColumn {
    let mut values = Vec::with_capacity(raw.len());
    let mut failed_rows = Vec::new();

    for (row, cell) in raw.iter().enumerate() {
        let (value, failed) = normalize_value(cell);
        values.push(value);
        if failed {
            failed_rows.push(row);
        }
    }

    NormalizedColumn { values, failed_rows }
}

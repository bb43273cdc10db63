//! Non-fatal data-quality warnings.
//!
//! The pipeline never aborts on a bad cell; it falls back to a defined
//! default and records one of these so callers can locate the problem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-fatal notice accumulated during one load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Warning {
    /// Non-empty cells in a numeric column failed to parse and fell back
    /// to 0.0. Genuinely empty cells do not warn.
    UnparseableNumeric { column: String, rows: Vec<usize> },
    /// Rows excluded from the record set because their timestamp could not
    /// be parsed.
    UnparseableTimestamp { rows: Vec<usize> },
    /// A column required by a feature is absent; the feature is disabled.
    MissingColumn { column: String, feature: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnparseableNumeric { column, rows } => write!(
                f,
                "column '{}': {} non-empty cell(s) failed numeric conversion (rows {:?}); using 0.0",
                column,
                rows.len(),
                rows
            ),
            Warning::UnparseableTimestamp { rows } => write!(
                f,
                "{} row(s) dropped: unparseable timestamp (rows {:?})",
                rows.len(),
                rows
            ),
            Warning::MissingColumn { column, feature } => {
                write!(f, "{} disabled: missing column '{}'", feature, column)
            }
        }
    }
}

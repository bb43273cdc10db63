//! Timestamp parsing and canonical ordering.
//!
//! All cumulative computations depend on the ascending-timestamp order
//! established here; the sort is stable so that ties keep original input
//! order and every downstream result stays deterministic.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use ledger_core::LedgerRecord;

/// Accepted datetime formats, tried after RFC 3339.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Accepted date-only formats (midnight UTC).
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Parse a raw timestamp cell. `None` means unparseable; the pipeline drops
/// such rows before any time-ordered computation.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(ndt.and_utc());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(nd) = NaiveDate::parse_from_str(raw, format) {
            return Some(nd.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}

/// Establish the canonical ascending-timestamp order.
///
/// Stable: rows with equal timestamps keep their original input order.
/// Must run before the running balance engine.
pub fn sort_canonical(records: &mut [LedgerRecord]) {
    records.sort_by_key(|r| r.timestamp);
}

//! Calendar-month volume buckets.

use chrono::Datelike;
use ledger_core::LedgerRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One month bucket: record count and summed fiat amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyVolume {
    /// Calendar month, "YYYY-MM".
    pub month: String,
    pub count: u64,
    pub total_fiat_amount: f64,
}

/// Bucket records by calendar month of their timestamp, ascending.
///
/// Records without a timestamp (Timestamp column absent) are skipped; the
/// view is simply empty when no record carries one.
pub fn monthly_volume(records: &[LedgerRecord]) -> Vec<MonthlyVolume> {
    let mut buckets: BTreeMap<(i32, u32), (u64, f64)> = BTreeMap::new();

    for record in records {
        let Some(ts) = record.timestamp else { continue };
        let bucket = buckets.entry((ts.year(), ts.month())).or_insert((0, 0.0));
        bucket.0 += 1;
        bucket.1 += record.total_fiat_amount;
    }

    buckets
        .into_iter()
        .map(|((year, month), (count, total))| MonthlyVolume {
            month: format!("{year:04}-{month:02}"),
            count,
            total_fiat_amount: total,
        })
        .collect()
}

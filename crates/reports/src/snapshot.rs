//! As-of-date holdings snapshot.

use chrono::NaiveDate;
use ledger_core::{LedgerRecord, TransactionType};
use serde::{Deserialize, Serialize};

/// Category sums over all records dated on or before a cutoff, optionally
/// restricted to one token. A fresh aggregate, not a lookup into the global
/// running balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub cutoff: NaiveDate,
    /// The token filter, if one was applied.
    pub currency_symbol: Option<String>,
    pub inflow: f64,
    pub outflow: f64,
    pub fees: f64,
    pub other: f64,
    pub net: f64,
    /// Records that contributed to the sums.
    pub record_count: u64,
}

/// Sum balance impacts up to and including `cutoff`.
///
/// The comparison is on the calendar date of each timestamp, so a cutoff of
/// 2024-03-15 includes everything that happened during that day. Records
/// without a timestamp never contribute.
pub fn snapshot_as_of(
    records: &[LedgerRecord],
    token: Option<&str>,
    cutoff: NaiveDate,
) -> Snapshot {
    let mut snapshot = Snapshot {
        cutoff,
        currency_symbol: token.map(str::to_string),
        inflow: 0.0,
        outflow: 0.0,
        fees: 0.0,
        other: 0.0,
        net: 0.0,
        record_count: 0,
    };

    for record in records {
        if let Some(token) = token {
            if record.currency_symbol != token {
                continue;
            }
        }
        let Some(ts) = record.timestamp else { continue };
        if ts.date_naive() > cutoff {
            continue;
        }
        match record.transaction_type {
            TransactionType::Inflow => snapshot.inflow += record.balance_impact,
            TransactionType::Outflow => snapshot.outflow += record.balance_impact,
            TransactionType::Fees => snapshot.fees += record.balance_impact,
            TransactionType::Other => snapshot.other += record.balance_impact,
        }
        snapshot.record_count += 1;
    }

    snapshot.net = snapshot.inflow + snapshot.outflow + snapshot.fees + snapshot.other;
    snapshot
}

//! Top-N records by absolute fiat magnitude.

use ledger_core::LedgerRecord;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Rank records by `abs(total_fiat_amount)` descending and return the top N.
///
/// The sort is stable, so ties keep the record set's canonical order.
pub fn top_by_magnitude(records: &[LedgerRecord], n: usize) -> Vec<LedgerRecord> {
    let mut ranked: Vec<LedgerRecord> = records.to_vec();
    ranked.sort_by_key(|r| Reverse(OrderedFloat(r.total_fiat_amount.abs())));
    ranked.truncate(n);
    ranked
}

//! Per-token running balance computation.
//!
//! Scans the time-ordered record set once, keeping a cumulative f64 sum per
//! currency symbol. The ascending-timestamp precondition is re-checked here
//! rather than trusted: a caller that hands over unsorted records gets them
//! re-sorted (stably) before any sum is taken.

use ledger_core::{BalanceStatus, LedgerRecord};
use std::collections::HashMap;
use tracing::warn;

/// Check the ascending-timestamp precondition.
fn is_time_ordered(records: &[LedgerRecord]) -> bool {
    records.windows(2).all(|w| w[0].timestamp <= w[1].timestamp)
}

/// Compute per-token running balances over the time-ordered record set.
///
/// Sums accumulate in 64-bit floating point with no mid-computation
/// rounding. `balance_status` becomes `Negative` wherever the running sum is
/// strictly below zero.
pub fn compute_running_balances(records: &mut Vec<LedgerRecord>) {
    if !is_time_ordered(records) {
        warn!("records not in ascending timestamp order; re-sorting before balance scan");
        records.sort_by_key(|r| r.timestamp);
    }

    let mut totals: HashMap<String, f64> = HashMap::new();
    for record in records.iter_mut() {
        let total = totals.entry(record.currency_symbol.clone()).or_insert(0.0);
        *total += record.balance_impact;
        record.running_balance = Some(*total);
        record.balance_status = if *total < 0.0 {
            BalanceStatus::Negative
        } else {
            BalanceStatus::Ok
        };
    }
}

/// Mark the running balance feature disabled on every record.
///
/// Used when a required input column is absent: "feature unavailable" is
/// distinct from "computed value of zero".
pub fn mark_disabled(records: &mut [LedgerRecord]) {
    for record in records.iter_mut() {
        record.running_balance = None;
        record.balance_status = BalanceStatus::Disabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};
    use ledger_core::TransactionType;

    fn make_record(row: usize, ts_day: u32, symbol: &str, impact: f64) -> LedgerRecord {
        LedgerRecord {
            row,
            timestamp: Some(Utc.with_ymd_and_hms(2024, 3, ts_day, 0, 0, 0).unwrap()),
            currency_symbol: symbol.to_string(),
            direction: "inflow".to_string(),
            event_label: String::new(),
            balance_impact: impact,
            total_fiat_amount: 0.0,
            unit_fiat_price: 0.0,
            transaction_hash: String::new(),
            counterparty: None,
            transaction_type: TransactionType::Inflow,
            running_balance: None,
            balance_status: BalanceStatus::Disabled,
            group_id: None,
        }
    }

    #[test]
    fn test_scenario_negative_status() {
        // impacts [5, -3, -4] -> balances [5, 2, -2], statuses [OK, OK, NEGATIVE]
        let mut records = vec![
            make_record(0, 1, "A", 5.0),
            make_record(1, 2, "A", -3.0),
            make_record(2, 3, "A", -4.0),
        ];
        compute_running_balances(&mut records);

        let balances: Vec<f64> = records.iter().map(|r| r.running_balance.unwrap()).collect();
        assert_relative_eq!(balances[0], 5.0);
        assert_relative_eq!(balances[1], 2.0);
        assert_relative_eq!(balances[2], -2.0);

        assert_eq!(records[0].balance_status, BalanceStatus::Ok);
        assert_eq!(records[1].balance_status, BalanceStatus::Ok);
        assert_eq!(records[2].balance_status, BalanceStatus::Negative);
    }

    #[test]
    fn test_partitions_are_independent() {
        let mut records = vec![
            make_record(0, 1, "A", 5.0),
            make_record(1, 2, "B", -1.0),
            make_record(2, 3, "A", 2.0),
        ];
        compute_running_balances(&mut records);

        assert_relative_eq!(records[0].running_balance.unwrap(), 5.0);
        assert_relative_eq!(records[1].running_balance.unwrap(), -1.0);
        assert_relative_eq!(records[2].running_balance.unwrap(), 7.0);
        assert_eq!(records[1].balance_status, BalanceStatus::Negative);
    }

    #[test]
    fn test_prefix_sum_property() {
        let impacts = [1.5, -0.25, 3.0, -4.75, 0.5];
        let mut records: Vec<LedgerRecord> = impacts
            .iter()
            .enumerate()
            .map(|(i, &impact)| make_record(i, (i + 1) as u32, "A", impact))
            .collect();
        compute_running_balances(&mut records);

        let mut expected = 0.0;
        for (record, impact) in records.iter().zip(impacts.iter()) {
            expected += impact;
            assert_relative_eq!(record.running_balance.unwrap(), expected);
        }
    }

    #[test]
    fn test_unsorted_input_is_resorted() {
        let mut records = vec![
            make_record(0, 3, "A", -4.0),
            make_record(1, 1, "A", 5.0),
            make_record(2, 2, "A", -3.0),
        ];
        compute_running_balances(&mut records);

        // Scan order must follow timestamps, not the caller's order.
        let rows: Vec<usize> = records.iter().map(|r| r.row).collect();
        assert_eq!(rows, vec![1, 2, 0]);
        let balances: Vec<f64> = records.iter().map(|r| r.running_balance.unwrap()).collect();
        assert_relative_eq!(balances[0], 5.0);
        assert_relative_eq!(balances[1], 2.0);
        assert_relative_eq!(balances[2], -2.0);
    }

    #[test]
    fn test_mark_disabled() {
        let mut records = vec![make_record(0, 1, "A", 5.0)];
        compute_running_balances(&mut records);
        assert!(records[0].running_balance.is_some());

        mark_disabled(&mut records);
        assert!(records[0].running_balance.is_none());
        assert_eq!(records[0].balance_status, BalanceStatus::Disabled);
    }

    #[test]
    fn test_empty_set() {
        let mut records: Vec<LedgerRecord> = Vec::new();
        compute_running_balances(&mut records);
        assert!(records.is_empty());
    }
}

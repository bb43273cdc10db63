//! Single-token record filter.

use ledger_core::LedgerRecord;

/// Return the records for one currency symbol, in canonical order.
///
/// Running balances and group ids are kept as computed on the full set; the
/// filter never recomputes them.
pub fn filter_by_token(records: &[LedgerRecord], token: &str) -> Vec<LedgerRecord> {
    records
        .iter()
        .filter(|r| r.currency_symbol == token)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_core::{BalanceStatus, TransactionType};

    fn make_record(row: usize, symbol: &str, balance: f64) -> LedgerRecord {
        LedgerRecord {
            row,
            timestamp: None,
            currency_symbol: symbol.to_string(),
            direction: String::new(),
            event_label: String::new(),
            balance_impact: 0.0,
            total_fiat_amount: 0.0,
            unit_fiat_price: 0.0,
            transaction_hash: String::new(),
            counterparty: None,
            transaction_type: TransactionType::Other,
            running_balance: Some(balance),
            balance_status: BalanceStatus::Ok,
            group_id: None,
        }
    }

    #[test]
    fn test_keeps_only_requested_token_in_order() {
        let records = vec![
            make_record(0, "BTC", 1.0),
            make_record(1, "ETH", 2.0),
            make_record(2, "BTC", 3.0),
        ];
        let filtered = filter_by_token(&records, "BTC");

        let rows: Vec<usize> = filtered.iter().map(|r| r.row).collect();
        assert_eq!(rows, vec![0, 2]);
    }

    #[test]
    fn test_precomputed_balances_survive() {
        let records = vec![make_record(0, "BTC", 42.0)];
        let filtered = filter_by_token(&records, "BTC");
        assert_eq!(filtered[0].running_balance, Some(42.0));
    }

    #[test]
    fn test_unknown_token_is_empty() {
        let records = vec![make_record(0, "BTC", 1.0)];
        assert!(filter_by_token(&records, "DOGE").is_empty());
    }
}

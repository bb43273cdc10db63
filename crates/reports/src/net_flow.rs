//! Net-flow pivot: per-token sums of balance impact by transaction type.

use ledger_core::{LedgerRecord, TransactionType};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;

/// One pivot row. Outflow and fee sums are negative by construction since
/// balance impact carries sign; a category absent for a token contributes 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetFlowRow {
    pub currency_symbol: String,
    pub inflow: f64,
    pub outflow: f64,
    pub fees: f64,
    pub other: f64,
    /// inflow + outflow + fees + other.
    pub net_flow: f64,
}

/// Build the net-flow pivot, sorted by net flow descending (ties by symbol).
pub fn net_flow_by_token(records: &[LedgerRecord]) -> Vec<NetFlowRow> {
    let mut by_token: HashMap<&str, NetFlowRow> = HashMap::new();

    for record in records {
        let row = by_token
            .entry(record.currency_symbol.as_str())
            .or_insert_with(|| NetFlowRow {
                currency_symbol: record.currency_symbol.clone(),
                ..NetFlowRow::default()
            });
        match record.transaction_type {
            TransactionType::Inflow => row.inflow += record.balance_impact,
            TransactionType::Outflow => row.outflow += record.balance_impact,
            TransactionType::Fees => row.fees += record.balance_impact,
            TransactionType::Other => row.other += record.balance_impact,
        }
    }

    let mut rows: Vec<NetFlowRow> = by_token.into_values().collect();
    for row in &mut rows {
        row.net_flow = row.inflow + row.outflow + row.fees + row.other;
    }
    rows.sort_by_key(|r| (Reverse(OrderedFloat(r.net_flow)), r.currency_symbol.clone()));
    rows
}

//! Core record types for the ledger analyzer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel symbol assigned when the currency cell is empty or missing.
pub const UNKNOWN_SYMBOL: &str = "UNKNOWN";

/// Derived transaction category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Assets moving into the ledger.
    Inflow,
    /// Assets moving out (excluding fee rows).
    Outflow,
    /// Outflow rows whose label matches a fee keyword.
    Fees,
    /// Any direction outside the inflow/outflow vocabulary.
    Other,
}

impl TransactionType {
    /// Lowercase tag used in reports and exports.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Inflow => "inflow",
            TransactionType::Outflow => "outflow",
            TransactionType::Fees => "fees",
            TransactionType::Other => "other",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Running-balance status marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceStatus {
    /// Running balance is zero or positive.
    #[serde(rename = "OK")]
    Ok,
    /// Running balance is strictly negative.
    #[serde(rename = "NEGATIVE")]
    Negative,
    /// The running balance engine did not run (required column absent).
    #[serde(rename = "Feature Disabled")]
    Disabled,
}

impl BalanceStatus {
    /// Display string used in reports and exports.
    pub fn as_str(self) -> &'static str {
        match self {
            BalanceStatus::Ok => "OK",
            BalanceStatus::Negative => "NEGATIVE",
            BalanceStatus::Disabled => "Feature Disabled",
        }
    }
}

impl fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ledger row as read from the CSV, before normalization.
///
/// Every field holds the raw cell text; cells of unrecognized or absent
/// columns are empty strings (`counterparty` is `None` when no counterparty
/// column was detected).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// 0-based data row index in the input file (header excluded).
    pub row: usize,
    pub timestamp: String,
    pub currency_symbol: String,
    pub direction: String,
    pub event_label: String,
    pub balance_impact: String,
    pub total_fiat_amount: String,
    pub unit_fiat_price: String,
    pub transaction_hash: String,
    pub counterparty: Option<String>,
}

/// One enriched ledger row after the pipeline completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// 0-based data row index in the input file. Tie-breaker for all
    /// deterministic orderings and the anchor for warning messages.
    pub row: usize,
    /// Parsed timestamp. `None` only when the whole Timestamp column is
    /// absent; rows with unparseable cells are dropped before this point.
    pub timestamp: Option<DateTime<Utc>>,
    /// Token partition key; never empty (see [`UNKNOWN_SYMBOL`]).
    pub currency_symbol: String,
    /// Raw direction string as read from the file.
    pub direction: String,
    /// Free-text label, used only for fee detection.
    pub event_label: String,
    /// Signed token quantity moved by this row. Always finite.
    pub balance_impact: f64,
    pub total_fiat_amount: f64,
    pub unit_fiat_price: f64,
    /// Whitespace-trimmed grouping key; empty when absent.
    pub transaction_hash: String,
    pub counterparty: Option<String>,
    /// Derived category; computed once, immutable thereafter.
    pub transaction_type: TransactionType,
    /// Per-token cumulative balance in ascending-timestamp order.
    /// `None` when the running balance engine is disabled.
    pub running_balance: Option<f64>,
    pub balance_status: BalanceStatus,
    /// Stable group id; set only for rows whose hash occurs more than once.
    pub group_id: Option<u32>,
}

impl LedgerRecord {
    /// Group marker string used in reports and exports.
    pub fn group_comment(&self) -> &'static str {
        if self.group_id.is_some() {
            "group"
        } else {
            "not a group"
        }
    }
}

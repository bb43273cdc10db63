//! Configuration structures for the ledger pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the ledger analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Recognized input column headers.
    pub columns: ColumnConfig,
    /// Transaction-type categorization.
    pub categorizer: CategorizerConfig,
    /// Report defaults.
    pub reports: ReportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: ColumnConfig::default(),
            categorizer: CategorizerConfig::default(),
            reports: ReportConfig::default(),
        }
    }
}

impl Config {
    /// Load a configuration from its JSON representation.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Recognized column headers. Matched exactly after trimming surrounding
/// whitespace from the file's header row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Drives ordering and every time-bucketed computation.
    pub timestamp: String,
    /// Partition key for running balances.
    pub currency_symbol: String,
    pub direction: String,
    pub event_label: String,
    /// Signed token quantity; drives running balances and net flow.
    pub balance_impact: String,
    /// Monetary magnitude; drives top-N and monthly volume.
    pub total_fiat_amount: String,
    pub unit_fiat_price: String,
    /// Multi-leg grouping key.
    pub transaction_hash: String,
    /// Counterparty candidates, checked in order; first match wins.
    pub counterparty_candidates: Vec<String>,
    /// Fallback: first header containing this substring.
    pub counterparty_substring: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            timestamp: "Timestamp".to_string(),
            currency_symbol: "Original Currency Symbol".to_string(),
            direction: "Direction".to_string(),
            event_label: "Event Label".to_string(),
            balance_impact: "Balance Impact (T)".to_string(),
            total_fiat_amount: "Total Fiat Amount ($)".to_string(),
            unit_fiat_price: "Transfer Unit Fiat Price ($)".to_string(),
            transaction_hash: "Transaction Hash".to_string(),
            counterparty_candidates: vec![
                "From Address Name".to_string(),
                "To Address Name".to_string(),
            ],
            counterparty_substring: "3rd Party".to_string(),
        }
    }
}

/// Transaction-type categorization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorizerConfig {
    /// Lowercase keywords that mark an outflow row as a fee.
    pub fee_keywords: Vec<String>,
}

impl Default for CategorizerConfig {
    fn default() -> Self {
        Self {
            fee_keywords: vec![
                "fee".to_string(),
                "gas".to_string(),
                "transaction cost".to_string(),
            ],
        }
    }
}

/// Report defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Row count for top-N reports.
    pub top_n: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { top_n: 10 }
    }
}

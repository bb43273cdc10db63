//! The load-and-clean pipeline.
//!
//! Raw CSV bytes in, an immutable enriched record set out:
//! read -> normalize numerics -> categorize -> parse/drop/sort timestamps ->
//! running balances -> transaction grouping.
//!
//! Deterministic by construction: no clock, counter, or iteration-order
//! dependence, so identical input bytes always produce an identical set.
//! Only a malformed file is fatal; everything else degrades the affected
//! feature and accumulates a [`Warning`].

use crate::{balance, grouping, grouping::GroupingSummary};
use ledger_core::{
    BalanceStatus, Config, LedgerRecord, RawRecord, Result, Warning, UNKNOWN_SYMBOL,
};
use ledger_ingestion::{categorize, normalize, reader, temporal};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Which recognized columns the input actually carried. Consumers use this
/// to tell "feature unavailable" from "empty result".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentColumns {
    pub timestamp: bool,
    pub currency_symbol: bool,
    pub direction: bool,
    pub event_label: bool,
    pub balance_impact: bool,
    pub total_fiat_amount: bool,
    pub unit_fiat_price: bool,
    pub transaction_hash: bool,
    pub counterparty: bool,
}

impl From<&reader::ColumnMap> for PresentColumns {
    fn from(map: &reader::ColumnMap) -> Self {
        Self {
            timestamp: map.timestamp.is_some(),
            currency_symbol: map.currency_symbol.is_some(),
            direction: map.direction.is_some(),
            event_label: map.event_label.is_some(),
            balance_impact: map.balance_impact.is_some(),
            total_fiat_amount: map.total_fiat_amount.is_some(),
            unit_fiat_price: map.unit_fiat_price.is_some(),
            transaction_hash: map.transaction_hash.is_some(),
            counterparty: map.counterparty.is_some(),
        }
    }
}

/// The finished, immutable result of one load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSet {
    /// Enriched records in canonical ascending-timestamp order (input order
    /// when the Timestamp column is absent).
    pub records: Vec<LedgerRecord>,
    /// Accumulated non-fatal notices, in stage order.
    pub warnings: Vec<Warning>,
    /// Rows excluded because their timestamp failed to parse.
    pub dropped_rows: usize,
    /// Whether running balances were computed.
    pub balance_enabled: bool,
    /// Grouping pass outcome.
    pub grouping: GroupingSummary,
    /// Columns detected in the header row.
    pub columns: PresentColumns,
}

impl LedgerSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The transaction-normalization and aggregation pipeline.
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    /// Create a pipeline from configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Borrow the pipeline configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the full load-and-clean pipeline over raw file bytes.
    ///
    /// Returns an error only for [`ledger_core::Error::MalformedFile`]; all
    /// other problems surface as warnings or disabled-feature markers on the
    /// returned set.
    pub fn run(&self, bytes: &[u8]) -> Result<LedgerSet> {
        let table = reader::read_table(bytes, &self.config.columns)?;
        let columns = PresentColumns::from(&table.columns);
        let mut warnings = Vec::new();

        let balance_impact = self.numeric_column(
            &table.records,
            |r| &r.balance_impact,
            &self.config.columns.balance_impact,
            &mut warnings,
        );
        let total_fiat = self.numeric_column(
            &table.records,
            |r| &r.total_fiat_amount,
            &self.config.columns.total_fiat_amount,
            &mut warnings,
        );
        let unit_price = self.numeric_column(
            &table.records,
            |r| &r.unit_fiat_price,
            &self.config.columns.unit_fiat_price,
            &mut warnings,
        );

        // Build records, dropping rows whose timestamp cell does not parse.
        // When the Timestamp column is absent entirely, no row is dropped;
        // the set keeps input order and time features are disabled instead.
        let mut records = Vec::with_capacity(table.records.len());
        let mut dropped = Vec::new();
        for (i, raw) in table.records.iter().enumerate() {
            let timestamp = if columns.timestamp {
                match temporal::parse_timestamp(&raw.timestamp) {
                    Some(ts) => Some(ts),
                    None => {
                        dropped.push(raw.row);
                        continue;
                    }
                }
            } else {
                None
            };

            let currency_symbol = match raw.currency_symbol.trim() {
                "" => UNKNOWN_SYMBOL.to_string(),
                symbol => symbol.to_string(),
            };

            let transaction_type =
                categorize::categorize(&raw.direction, &raw.event_label, &self.config.categorizer);

            records.push(LedgerRecord {
                row: raw.row,
                timestamp,
                currency_symbol,
                direction: raw.direction.clone(),
                event_label: raw.event_label.clone(),
                balance_impact: balance_impact[i],
                total_fiat_amount: total_fiat[i],
                unit_fiat_price: unit_price[i],
                transaction_hash: raw.transaction_hash.trim().to_string(),
                counterparty: raw
                    .counterparty
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
                transaction_type,
                running_balance: None,
                balance_status: BalanceStatus::Disabled,
                group_id: None,
            });
        }

        if !dropped.is_empty() {
            warn!(count = dropped.len(), "dropped rows with unparseable timestamps");
            warnings.push(Warning::UnparseableTimestamp { rows: dropped.clone() });
        }
        let dropped_rows = dropped.len();

        if columns.timestamp {
            temporal::sort_canonical(&mut records);
        }

        // Running balances need both the ordering column and the impact
        // column; without either the feature reports itself disabled.
        let balance_enabled = columns.timestamp && columns.balance_impact;
        if balance_enabled {
            balance::compute_running_balances(&mut records);
        } else {
            balance::mark_disabled(&mut records);
            let missing = if columns.timestamp {
                &self.config.columns.balance_impact
            } else {
                &self.config.columns.timestamp
            };
            warn!(column = missing.as_str(), "running balance disabled");
            warnings.push(Warning::MissingColumn {
                column: missing.clone(),
                feature: "running balance".to_string(),
            });
        }

        let grouping = if columns.transaction_hash {
            grouping::assign_groups(&mut records)
        } else {
            warnings.push(Warning::MissingColumn {
                column: self.config.columns.transaction_hash.clone(),
                feature: "transaction grouping".to_string(),
            });
            grouping::mark_disabled(&mut records)
        };

        debug!(
            records = records.len(),
            dropped = dropped_rows,
            groups = grouping.group_count,
            "pipeline complete"
        );

        Ok(LedgerSet {
            records,
            warnings,
            dropped_rows,
            balance_enabled,
            grouping,
            columns,
        })
    }

    /// Normalize one numeric column, accumulating its warning if any
    /// non-empty cell failed. An absent column yields all zeros silently;
    /// the dependent features consult [`PresentColumns`] instead.
    fn numeric_column(
        &self,
        records: &[RawRecord],
        cell: impl Fn(&RawRecord) -> &String,
        column: &str,
        warnings: &mut Vec<Warning>,
    ) -> Vec<f64> {
        let raw: Vec<String> = records.iter().map(|r| cell(r).clone()).collect();
        let normalized = normalize::normalize_column(&raw);
        if !normalized.failed_rows.is_empty() {
            // Report original input row indices, not positions in the
            // (possibly already filtered) working vector.
            let rows: Vec<usize> = normalized
                .failed_rows
                .iter()
                .map(|&i| records[i].row)
                .collect();
            warn!(column, failed = rows.len(), "numeric cells fell back to 0.0");
            warnings.push(Warning::UnparseableNumeric {
                column: column.to_string(),
                rows,
            });
        }
        normalized.values
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

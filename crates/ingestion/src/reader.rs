//! CSV reading and column detection.
//!
//! Parses the raw ledger file into [`RawRecord`]s and maps the recognized
//! column headers to their positions. Headers are matched after trimming
//! surrounding whitespace; a missing optional column leaves its cells empty
//! and disables only the features that depend on it.

use csv::ReaderBuilder;
use ledger_core::{ColumnConfig, Error, RawRecord, Result};

/// Positions of the recognized columns in the header row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub timestamp: Option<usize>,
    pub currency_symbol: Option<usize>,
    pub direction: Option<usize>,
    pub event_label: Option<usize>,
    pub balance_impact: Option<usize>,
    pub total_fiat_amount: Option<usize>,
    pub unit_fiat_price: Option<usize>,
    pub transaction_hash: Option<usize>,
    pub counterparty: Option<usize>,
}

impl ColumnMap {
    /// Detect recognized columns among the (already trimmed) headers.
    pub fn detect(headers: &[String], config: &ColumnConfig) -> Self {
        let find = |name: &str| headers.iter().position(|h| h == name);

        // Counterparty: named candidates in order, then the first header
        // containing the configured substring.
        let counterparty = config
            .counterparty_candidates
            .iter()
            .find_map(|name| find(name))
            .or_else(|| {
                headers
                    .iter()
                    .position(|h| h.contains(&config.counterparty_substring))
            });

        Self {
            timestamp: find(&config.timestamp),
            currency_symbol: find(&config.currency_symbol),
            direction: find(&config.direction),
            event_label: find(&config.event_label),
            balance_impact: find(&config.balance_impact),
            total_fiat_amount: find(&config.total_fiat_amount),
            unit_fiat_price: find(&config.unit_fiat_price),
            transaction_hash: find(&config.transaction_hash),
            counterparty,
        }
    }
}

/// Raw table: detected columns plus one [`RawRecord`] per data row.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub columns: ColumnMap,
    pub records: Vec<RawRecord>,
}

/// Read the ledger CSV from raw bytes. A header row is required.
///
/// Returns [`Error::MalformedFile`] only when the input cannot be parsed as
/// tabular data at all; ragged rows are tolerated (missing cells read as
/// empty).
pub fn read_table(bytes: &[u8], config: &ColumnConfig) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| Error::malformed(e.to_string()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(Error::malformed("empty or missing header row"));
    }

    let columns = ColumnMap::detect(&headers, config);

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            // +2: 1-indexed plus the header row.
            Error::malformed(format!("line {}: {}", row + 2, e))
        })?;

        let cell = |idx: Option<usize>| -> String {
            idx.and_then(|i| record.get(i)).unwrap_or("").to_string()
        };

        records.push(RawRecord {
            row,
            timestamp: cell(columns.timestamp),
            currency_symbol: cell(columns.currency_symbol),
            direction: cell(columns.direction),
            event_label: cell(columns.event_label),
            balance_impact: cell(columns.balance_impact),
            total_fiat_amount: cell(columns.total_fiat_amount),
            unit_fiat_price: cell(columns.unit_fiat_price),
            transaction_hash: cell(columns.transaction_hash),
            counterparty: columns
                .counterparty
                .and_then(|i| record.get(i))
                .map(|s| s.to_string()),
        });
    }

    Ok(RawTable { columns, records })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ColumnConfig {
        ColumnConfig::default()
    }

    #[test]
    fn test_detect_all_columns() {
        let headers: Vec<String> = [
            "Timestamp",
            "Original Currency Symbol",
            "Direction",
            "Event Label",
            "Balance Impact (T)",
            "Total Fiat Amount ($)",
            "Transfer Unit Fiat Price ($)",
            "Transaction Hash",
            "From Address Name",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let map = ColumnMap::detect(&headers, &config());
        assert_eq!(map.timestamp, Some(0));
        assert_eq!(map.balance_impact, Some(4));
        assert_eq!(map.transaction_hash, Some(7));
        assert_eq!(map.counterparty, Some(8));
    }

    #[test]
    fn test_counterparty_candidate_order() {
        let headers: Vec<String> = ["To Address Name", "From Address Name"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        // "From Address Name" is the first candidate even though it appears
        // second in the file.
        let map = ColumnMap::detect(&headers, &config());
        assert_eq!(map.counterparty, Some(1));
    }

    #[test]
    fn test_counterparty_substring_fallback() {
        let headers: Vec<String> = ["Timestamp", "3rd Party Wallet"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let map = ColumnMap::detect(&headers, &config());
        assert_eq!(map.counterparty, Some(1));
    }

    #[test]
    fn test_read_table_trims_headers() {
        let csv = "  Timestamp , Balance Impact (T)\n2024-01-01,5.0\n";
        let table = read_table(csv.as_bytes(), &config()).unwrap();
        assert_eq!(table.columns.timestamp, Some(0));
        assert_eq!(table.columns.balance_impact, Some(1));
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0].timestamp, "2024-01-01");
        assert_eq!(table.records[0].balance_impact, "5.0");
    }

    #[test]
    fn test_read_table_ragged_rows() {
        let csv = "Timestamp,Direction,Balance Impact (T)\n2024-01-01,inflow\n";
        let table = read_table(csv.as_bytes(), &config()).unwrap();
        assert_eq!(table.records[0].balance_impact, "");
    }

    #[test]
    fn test_missing_column_reads_empty() {
        let csv = "Timestamp\n2024-01-01\n";
        let table = read_table(csv.as_bytes(), &config()).unwrap();
        assert_eq!(table.columns.transaction_hash, None);
        assert_eq!(table.records[0].transaction_hash, "");
        assert_eq!(table.records[0].counterparty, None);
    }

    #[test]
    fn test_malformed_file() {
        // Invalid UTF-8 in the header row is unrecoverable.
        let csv = b"Timestamp,\xff\xfe\n2024-01-01,5\n";
        let result = read_table(csv, &config());
        assert!(matches!(result, Err(Error::MalformedFile(_))));
    }

    #[test]
    fn test_empty_input_is_malformed() {
        let result = read_table(b"", &config());
        assert!(matches!(result, Err(Error::MalformedFile(_))));
    }
}

//! CSV export for the enriched record set and the aggregation views.
//!
//! Numeric cells use Rust's shortest-roundtrip float formatting, so an
//! exported value parses back to exactly the value that was computed.

use ledger_core::{LedgerRecord, Result};
use serde::Serialize;
use std::io;

/// Header row for the enriched record export.
const RECORD_HEADERS: [&str; 14] = [
    "Timestamp",
    "Original Currency Symbol",
    "Direction",
    "Event Label",
    "Balance Impact (T)",
    "Total Fiat Amount ($)",
    "Transfer Unit Fiat Price ($)",
    "Transaction Hash",
    "Counterparty",
    "Transaction Type",
    "Running Balance",
    "Balance Status",
    "Group ID",
    "Group Comment",
];

/// Write the enriched record set as CSV.
///
/// Absent values (no timestamp, disabled running balance, ungrouped rows)
/// export as empty cells rather than placeholder text, except the balance
/// status and group comment which carry their display vocabulary.
pub fn write_records<W: io::Write>(writer: W, records: &[LedgerRecord]) -> Result<()> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(RECORD_HEADERS)?;

    for record in records {
        w.write_record([
            record
                .timestamp
                .map(|ts| ts.to_rfc3339())
                .unwrap_or_default(),
            record.currency_symbol.clone(),
            record.direction.clone(),
            record.event_label.clone(),
            record.balance_impact.to_string(),
            record.total_fiat_amount.to_string(),
            record.unit_fiat_price.to_string(),
            record.transaction_hash.clone(),
            record.counterparty.clone().unwrap_or_default(),
            record.transaction_type.as_str().to_string(),
            record
                .running_balance
                .map(|b| b.to_string())
                .unwrap_or_default(),
            record.balance_status.as_str().to_string(),
            record.group_id.map(|id| id.to_string()).unwrap_or_default(),
            record.group_comment().to_string(),
        ])?;
    }

    w.flush()?;
    Ok(())
}

/// Write any serializable view (net-flow rows, monthly volume buckets,
/// counterparty counts, snapshots) as CSV with a serde-derived header row.
pub fn write_view<W: io::Write, T: Serialize>(writer: W, rows: &[T]) -> Result<()> {
    let mut w = csv::Writer::from_writer(writer);
    for row in rows {
        w.serialize(row)?;
    }
    w.flush()?;
    Ok(())
}

/// Render the enriched record set to an in-memory CSV string.
pub fn records_to_csv(records: &[LedgerRecord]) -> Result<String> {
    let mut buf = Vec::new();
    write_records(&mut buf, records)?;
    Ok(string_from_csv_bytes(buf))
}

/// Render a serializable view to an in-memory CSV string.
pub fn view_to_csv<T: Serialize>(rows: &[T]) -> Result<String> {
    let mut buf = Vec::new();
    write_view(&mut buf, rows)?;
    Ok(string_from_csv_bytes(buf))
}

// The csv writer only ever emits what we handed it, and every cell above is
// a Rust String, so the buffer is valid UTF-8.
fn string_from_csv_bytes(buf: Vec<u8>) -> String {
    String::from_utf8_lossy(&buf).into_owned()
}

//! Data ingestion and normalization for the ledger analyzer.
//!
//! This crate handles:
//! - CSV reading and column detection
//! - Numeric column normalization (currency formatting, zero fallback)
//! - Transaction-type categorization
//! - Timestamp parsing and canonical ordering

pub mod categorize;
pub mod normalize;
pub mod reader;
pub mod temporal;

pub use categorize::categorize;
pub use normalize::{normalize_column, NormalizedColumn};
pub use reader::{read_table, ColumnMap, RawTable};
pub use temporal::{parse_timestamp, sort_canonical};

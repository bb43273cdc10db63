//! Record enrichment and pipeline orchestration for the ledger analyzer.
//!
//! This crate handles:
//! - Per-token running balance computation
//! - Multi-leg transaction grouping
//! - The load-and-clean pipeline (raw bytes to an immutable record set)
//! - Content-keyed caching of the load stage

pub mod balance;
pub mod cache;
pub mod grouping;
pub mod pipeline;

pub use cache::LoadCache;
pub use grouping::GroupingSummary;
pub use pipeline::{LedgerSet, Pipeline, PresentColumns};

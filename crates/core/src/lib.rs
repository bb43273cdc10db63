//! Core types and configuration for the ledger analyzer.
//!
//! This crate provides shared types used across all other crates:
//! - Ledger record types (raw and enriched)
//! - Warning and error types
//! - Configuration structures

pub mod config;
pub mod error;
pub mod types;
pub mod warning;

pub use config::{CategorizerConfig, ColumnConfig, Config, ReportConfig};
pub use error::{Error, Result};
pub use types::*;
pub use warning::Warning;

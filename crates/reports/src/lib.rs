//! Aggregation views over the cleaned record set.
//!
//! Every view is a pure reducer: it reads the finished records, mutates
//! nothing, and has no ordering dependency on the other views. Each view's
//! rows are exportable as CSV with the same numeric values as computed.

pub mod counterparty;
pub mod export;
pub mod filter;
pub mod magnitude;
pub mod net_flow;
pub mod snapshot;
pub mod volume;

pub use counterparty::{counterparty_frequency, CounterpartyCount};
pub use export::{records_to_csv, view_to_csv, write_records, write_view};
pub use filter::filter_by_token;
pub use magnitude::top_by_magnitude;
pub use net_flow::{net_flow_by_token, NetFlowRow};
pub use snapshot::{snapshot_as_of, Snapshot};
pub use volume::{monthly_volume, MonthlyVolume};

//! Transaction-type categorization.
//!
//! A pure per-row mapping from (direction, event label) to a category tag.
//! No dependency on row order or neighbors.

use ledger_core::{CategorizerConfig, TransactionType};

/// Categorize one row. Case-insensitive on both fields.
///
/// - direction "inflow" -> Inflow
/// - direction "outflow" -> Fees when the label contains a fee keyword,
///   otherwise Outflow
/// - anything else -> Other
pub fn categorize(
    direction: &str,
    event_label: &str,
    config: &CategorizerConfig,
) -> TransactionType {
    match direction.trim().to_lowercase().as_str() {
        "inflow" => TransactionType::Inflow,
        "outflow" => {
            let label = event_label.to_lowercase();
            let is_fee = config
                .fee_keywords
                .iter()
                .any(|keyword| label.contains(&keyword.to_lowercase()));
            if is_fee {
                TransactionType::Fees
            } else {
                TransactionType::Outflow
            }
        }
        _ => TransactionType::Other,
    }
}

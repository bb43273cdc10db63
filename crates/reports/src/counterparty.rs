//! Counterparty frequency ranking.

use ledger_core::LedgerRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One counterparty and how many records name it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterpartyCount {
    pub counterparty: String,
    pub count: u64,
}

/// Count records per counterparty and return the top N by count.
///
/// Records without a counterparty are ignored. Ties break by first
/// appearance in the record set, so the ranking is deterministic.
pub fn counterparty_frequency(records: &[LedgerRecord], n: usize) -> Vec<CounterpartyCount> {
    let mut counts: HashMap<&str, (u64, usize)> = HashMap::new();

    for (index, record) in records.iter().enumerate() {
        let Some(name) = record.counterparty.as_deref() else {
            continue;
        };
        let entry = counts.entry(name).or_insert((0, index));
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, u64, usize)> = counts
        .into_iter()
        .map(|(name, (count, first_seen))| (name, count, first_seen))
        .collect();
    ranked.sort_by_key(|&(_, count, first_seen)| (std::cmp::Reverse(count), first_seen));
    ranked.truncate(n);

    ranked
        .into_iter()
        .map(|(name, count, _)| CounterpartyCount {
            counterparty: name.to_string(),
            count,
        })
        .collect()
}

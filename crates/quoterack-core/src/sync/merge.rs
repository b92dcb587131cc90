//! Merge resolver
//!
//! Union-by-identity over two quote lists. There is no timestamp,
//! version vector, or precedence rule: a batch record is appended only
//! when no equal (text, category) record exists, and nothing is ever
//! overwritten. First-seen wins.

use crate::models::QuoteRecord;

/// Result of merging a remote batch into the current list
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// The extended list (current records followed by appended ones)
    pub records: Vec<QuoteRecord>,
    /// How many batch records were appended
    pub appended: usize,
}

impl MergeOutcome {
    /// Whether the merge changed anything
    pub fn changed(&self) -> bool {
        self.appended > 0
    }
}

/// Merge a batch of externally observed quotes into the current list
///
/// Each batch record is checked against the list as progressively
/// extended by earlier batch records in the same call, so duplicates
/// within the batch are suppressed as well.
pub fn merge(current: &[QuoteRecord], batch: Vec<QuoteRecord>) -> MergeOutcome {
    let mut records = current.to_vec();
    let mut appended = 0;

    for incoming in batch {
        let exists = records
            .iter()
            .any(|r| r.text == incoming.text && r.category == incoming.category);
        if !exists {
            records.push(incoming);
            appended += 1;
        }
    }

    MergeOutcome { records, appended }
}

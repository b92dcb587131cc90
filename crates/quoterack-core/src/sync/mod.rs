//! Remote synchronization
//!
//! Best-effort, existence-based sync with a configured HTTP endpoint:
//!
//! 1. `pull` fetches remote posts and maps them to quote records
//! 2. the merge resolver appends records not already in the store
//! 3. `push` uploads the full serialized store
//!
//! There is no versioning, no retry policy, and no conflict resolution
//! beyond union-by-identity. A failure in either half is logged and
//! does not prevent the other half from running.

mod client;
mod merge;

pub use client::{SyncClient, PULL_LIMIT, SERVER_CATEGORY};
pub use merge::{merge, MergeOutcome};

use crate::store::QuoteStore;

/// What a single sync pass accomplished
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOutcome {
    /// Records appended to the store by the pull+merge half
    pub merged: usize,
    /// Whether the pull half completed and merged cleanly
    pub pulled: bool,
    /// Whether the push half completed
    pub pushed: bool,
}

impl SyncOutcome {
    /// Whether the local store changed during this pass
    pub fn store_changed(&self) -> bool {
        self.merged > 0
    }

    /// Whether both halves of the pass failed
    pub fn failed(&self) -> bool {
        !self.pulled && !self.pushed
    }
}

/// Run one pull+push pair against the endpoint
///
/// Each half is best-effort: a pull failure still lets the push run,
/// and vice versa. Transport and parse failures are logged and
/// swallowed; the returned outcome only reflects what succeeded.
pub async fn sync_once(client: &SyncClient, store: &mut QuoteStore) -> SyncOutcome {
    let mut outcome = SyncOutcome::default();

    match client.pull().await {
        Ok(batch) => match store.merge_remote(batch) {
            Ok(appended) => {
                outcome.pulled = true;
                outcome.merged = appended;
            }
            Err(e) => client::log_sync_failure("Merge", &e.into()),
        },
        Err(e) => client::log_sync_failure("Fetch", &e),
    }

    match client.push(store.snapshot()).await {
        Ok(()) => outcome.pushed = true,
        Err(e) => client::log_sync_failure("Sync", &e),
    }

    outcome
}

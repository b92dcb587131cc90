//! Sync command handlers

use anyhow::{bail, Result};
use tracing::info;

use quoterack_core::sync::{sync_once, SyncClient, SyncOutcome};
use quoterack_core::QuoteStore;

use crate::output::Output;

/// Run one manual pull+push pair against the configured endpoint
pub async fn sync(store: &mut QuoteStore, output: &Output) -> Result<()> {
    let client = client_for(store)?;

    output.message(&format!("Syncing with {}...", client.url()));

    let outcome = sync_once(&client, store).await;
    report(&outcome, output);

    Ok(())
}

/// Run the recurring sync task until Ctrl-C
///
/// The first pass runs immediately, then one pass per interval tick.
/// Passes run sequentially on this task, so a slow pass delays the next
/// tick instead of overlapping with it.
pub async fn watch(store: &mut QuoteStore, interval_secs: Option<u64>, output: &Output) -> Result<()> {
    let client = client_for(store)?;
    let secs = interval_secs.unwrap_or(store.config().sync_interval_secs);

    output.message(&format!(
        "Syncing with {} every {}s (Ctrl-C to stop)",
        client.url(),
        secs
    ));

    let mut ticker = tokio::time::interval(std::time::Duration::from_secs(secs));

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let outcome = sync_once(&client, store).await;
                report(&outcome, output);
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Sync watcher stopped");
                output.message("Stopped.");
                return Ok(());
            }
        }
    }
}

/// Build a sync client from the store's configuration
fn client_for(store: &QuoteStore) -> Result<SyncClient> {
    let config = store.config();

    if !config.sync_enabled {
        bail!(
            "Sync is not enabled. Enable it with:\n  \
             quoterack config set sync_enabled true\n  \
             quoterack config set server_url https://your-server/posts"
        );
    }

    let Some(ref server_url) = config.server_url else {
        bail!(
            "Server URL not configured. Set it with:\n  \
             quoterack config set server_url https://your-server/posts"
        );
    };

    SyncClient::new(server_url)
}

/// Surface the outcome of one sync pass
///
/// Transport failures were already logged and swallowed. A pass where
/// both halves failed is announced as a failure rather than a no-op.
fn report(outcome: &SyncOutcome, output: &Output) {
    if outcome.failed() {
        output.message("Sync failed (see log)");
        return;
    }
    if outcome.store_changed() {
        output.success(&format!(
            "Quotes updated from server ({} new)",
            outcome.merged
        ));
    }
    if outcome.pushed {
        output.success("Quotes synced with server!");
    }
    if !outcome.store_changed() && !outcome.pushed {
        output.message("Sync made no changes");
    }
}

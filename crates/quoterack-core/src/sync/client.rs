//! Remote sync client
//!
//! HTTP client for the configured endpoint. `pull` reads remote posts
//! and maps them to quote records; `push` uploads the full serialized
//! store. Both are best-effort: failures are logged and surfaced to the
//! caller, never retried.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::models::QuoteRecord;

/// Category assigned to every record observed from the server
pub const SERVER_CATEGORY: &str = "Server";

/// How many remote items a single pull takes
pub const PULL_LIMIT: usize = 5;

/// Request timeout in seconds
const REQUEST_TIMEOUT: u64 = 10;

/// A post as returned by the remote endpoint
///
/// Only the title is mapped; everything else the server sends is ignored.
#[derive(Debug, Deserialize)]
struct RemotePost {
    title: String,
}

/// HTTP sync client for a single configured endpoint
pub struct SyncClient {
    url: String,
    http: reqwest::Client,
}

impl SyncClient {
    /// Create a sync client for the given endpoint URL
    pub fn new(url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT))
            .user_agent(concat!("quoterack/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            url: url.to_string(),
            http,
        })
    }

    /// The configured endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch remote posts and map them to quote records
    ///
    /// Takes the first 5 items and maps each title to a record with the
    /// fixed "Server" category. Transport and parse failures are
    /// returned to the caller; no retry, no mutation.
    pub async fn pull(&self) -> Result<Vec<QuoteRecord>> {
        debug!("Fetching quotes from {}", self.url);

        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("Fetch from {} failed", self.url))?;

        let posts: Vec<RemotePost> = response
            .json()
            .await
            .with_context(|| format!("Failed to parse response from {}", self.url))?;

        let records = map_posts(posts);
        info!("Pulled {} quote(s) from server", records.len());
        Ok(records)
    }

    /// Upload the full serialized store to the endpoint
    ///
    /// The response body is ignored; success and failure are both
    /// terminal for this call.
    pub async fn push(&self, records: &[QuoteRecord]) -> Result<()> {
        debug!("Pushing {} quote(s) to {}", records.len(), self.url);

        self.http
            .post(&self.url)
            .json(records)
            .send()
            .await
            .with_context(|| format!("Push to {} failed", self.url))?;

        info!("Quotes synced to server");
        Ok(())
    }
}

/// Map remote posts to quote records
///
/// Field mapping: remote title becomes the quote text; the category is
/// always "Server". Only the first `PULL_LIMIT` posts are taken.
fn map_posts(posts: Vec<RemotePost>) -> Vec<QuoteRecord> {
    posts
        .into_iter()
        .take(PULL_LIMIT)
        .map(|post| QuoteRecord::new(post.title, SERVER_CATEGORY))
        .collect()
}

/// Log a swallowed sync failure
///
/// The periodic sync path treats transport errors as best-effort: they
/// are logged here and produce no mutation and no user-facing signal.
pub fn log_sync_failure(operation: &str, error: &anyhow::Error) {
    warn!("{} failed: {:#}", operation, error);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts(titles: &[&str]) -> Vec<RemotePost> {
        titles
            .iter()
            .map(|t| RemotePost {
                title: t.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_map_posts_assigns_server_category() {
        let records = map_posts(posts(&["alpha", "beta"]));

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "alpha");
        assert_eq!(records[0].category, SERVER_CATEGORY);
        assert_eq!(records[1].text, "beta");
    }

    #[test]
    fn test_map_posts_takes_first_five() {
        let records = map_posts(posts(&["1", "2", "3", "4", "5", "6", "7"]));

        assert_eq!(records.len(), 5);
        assert_eq!(records[4].text, "5");
    }

    #[test]
    fn test_map_posts_empty() {
        assert!(map_posts(Vec::new()).is_empty());
    }

    #[test]
    fn test_remote_post_ignores_extra_fields() {
        let raw = r#"[{"userId": 1, "id": 1, "title": "quoted", "body": "ignored"}]"#;
        let posts: Vec<RemotePost> = serde_json::from_str(raw).unwrap();
        let records = map_posts(posts);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "quoted");
    }

    #[test]
    fn test_sync_client_new() {
        let client = SyncClient::new("https://example.com/posts").unwrap();
        assert_eq!(client.url(), "https://example.com/posts");
    }
}

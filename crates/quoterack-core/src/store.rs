//! Quote store
//!
//! The `QuoteStore` owns the in-memory ordered quote list, the persisted
//! filter selection, and the storage adapter. It is the source of truth
//! during a session and writes a full snapshot to durable storage on
//! every mutation.
//!
//! ## First run
//!
//! When no durable quote list exists, the store installs the three seed
//! quotes and persists them before serving any read.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = QuoteStore::open()?;
//!
//! store.add("Stay hungry.", "Motivation")?;
//!
//! let motivation = store.filtered("Motivation");
//! ```

use rand::Rng;

use crate::config::Config;
use crate::error::{QuoteError, QuoteResult};
use crate::models::{seed_quotes, QuoteRecord, CATEGORY_ALL};
use crate::storage::{
    StorageAdapter, StorageError, LAST_VIEWED_KEY, QUOTES_KEY, SELECTED_CATEGORY_KEY,
};
use crate::sync::merge;

/// Owned quote collection backed by the storage adapter
#[derive(Debug)]
pub struct QuoteStore {
    /// Ordered quote list, insertion order preserved
    records: Vec<QuoteRecord>,
    /// Persisted filter selection ("all" or a category name)
    selected_category: String,
    /// Storage adapter
    storage: StorageAdapter,
    /// Configuration
    config: Config,
}

impl QuoteStore {
    /// Open the store, seeding the quote list if none exists
    pub fn open() -> anyhow::Result<Self> {
        let config = Config::load()?;
        Ok(Self::open_with_config(config)?)
    }

    /// Open the store with a specific configuration
    pub fn open_with_config(config: Config) -> QuoteResult<Self> {
        let storage = StorageAdapter::new(&config);

        let records = match storage.get_durable(QUOTES_KEY)? {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| StorageError::InvalidValue {
                    key: QUOTES_KEY.to_string(),
                    details: e.to_string(),
                })?
            }
            None => {
                let seeds = seed_quotes();
                storage.set_durable(QUOTES_KEY, &serde_json::to_string(&seeds)?)?;
                seeds
            }
        };

        let selected_category = storage
            .get_durable(SELECTED_CATEGORY_KEY)?
            .unwrap_or_else(|| CATEGORY_ALL.to_string());

        Ok(Self {
            records,
            selected_category,
            storage,
            config,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read-only view of the full ordered quote list
    pub fn snapshot(&self) -> &[QuoteRecord] {
        &self.records
    }

    /// Number of quotes in the store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no quotes
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add a new quote
    ///
    /// Both fields are trimmed; if either is empty after trimming the
    /// store is left untouched and a validation error is returned.
    pub fn add(&mut self, text: &str, category: &str) -> QuoteResult<QuoteRecord> {
        let text = text.trim();
        let category = category.trim();

        if text.is_empty() {
            return Err(QuoteError::Validation { field: "text" });
        }
        if category.is_empty() {
            return Err(QuoteError::Validation { field: "category" });
        }

        let record = QuoteRecord::new(text, category);
        self.records.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Append a batch of quotes (import path)
    ///
    /// Additive: incoming records are appended after the existing ones
    /// with no deduplication and no field validation.
    pub fn extend(&mut self, records: Vec<QuoteRecord>) -> QuoteResult<usize> {
        let count = records.len();
        self.records.extend(records);
        self.persist()?;
        Ok(count)
    }

    /// Merge externally observed quotes into the store
    ///
    /// Union by identity: a batch record is appended only when no equal
    /// (text, category) record exists, checking against the list as it
    /// grows within this call. Returns the number of appended records;
    /// zero means the store (and disk) were left untouched.
    pub fn merge_remote(&mut self, batch: Vec<QuoteRecord>) -> QuoteResult<usize> {
        let outcome = merge(&self.records, batch);
        if !outcome.changed() {
            return Ok(0);
        }

        self.records = outcome.records;
        self.persist()?;
        Ok(outcome.appended)
    }

    /// Distinct categories in first-seen order
    ///
    /// Always derived fresh from the current list; never cached.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.category) {
                seen.push(record.category.clone());
            }
        }
        seen
    }

    /// Computed view for a filter selection
    ///
    /// `"all"` yields the whole store; anything else yields the records
    /// whose category matches exactly, in original order.
    pub fn filtered(&self, selection: &str) -> Vec<QuoteRecord> {
        if selection == CATEGORY_ALL {
            return self.records.clone();
        }

        self.records
            .iter()
            .filter(|r| r.category == selection)
            .cloned()
            .collect()
    }

    /// The persisted filter selection
    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    /// Persist a new filter selection
    pub fn set_selected_category(&mut self, selection: &str) -> QuoteResult<()> {
        self.selected_category = selection.to_string();
        self.storage
            .set_durable(SELECTED_CATEGORY_KEY, selection)?;
        Ok(())
    }

    /// Pick a quote uniformly at random over the full store
    ///
    /// Returns `None` on an empty store rather than indexing into it.
    pub fn random(&self) -> Option<&QuoteRecord> {
        if self.records.is_empty() {
            return None;
        }

        let index = rand::thread_rng().gen_range(0..self.records.len());
        Some(&self.records[index])
    }

    /// Record the last randomly viewed quote (session-scoped)
    pub fn record_last_viewed(&mut self, record: &QuoteRecord) -> QuoteResult<()> {
        let raw = serde_json::to_string(record)?;
        self.storage.set_session(LAST_VIEWED_KEY, raw);
        Ok(())
    }

    /// The last randomly viewed quote in this session, if any
    pub fn last_viewed(&self) -> Option<QuoteRecord> {
        self.storage
            .get_session(LAST_VIEWED_KEY)
            .and_then(|raw| serde_json::from_str(raw).ok())
    }

    /// Write the full quote list snapshot to durable storage
    fn persist(&self) -> QuoteResult<()> {
        let raw = serde_json::to_string(&self.records)?;
        self.storage.set_durable(QUOTES_KEY, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        Config {
            data_dir: temp_dir.path().to_path_buf(),
            ..Config::default()
        }
    }

    #[test]
    fn test_open_installs_seeds() {
        let temp_dir = TempDir::new().unwrap();
        let store = QuoteStore::open_with_config(test_config(&temp_dir)).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.snapshot()[0].text, "Believe in yourself!");
        assert_eq!(store.snapshot()[1].category, "Humor");
        assert_eq!(store.snapshot()[2].category, "Education");

        // Seeds are persisted immediately
        assert!(temp_dir.path().join("quotes.json").exists());
    }

    #[test]
    fn test_seed_idempotence() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        let first: Vec<_> = QuoteStore::open_with_config(config.clone())
            .unwrap()
            .snapshot()
            .to_vec();
        let second: Vec<_> = QuoteStore::open_with_config(config)
            .unwrap()
            .snapshot()
            .to_vec();

        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_open_rejects_corrupt_quote_list() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        std::fs::write(temp_dir.path().join("quotes.json"), "not json").unwrap();

        let err = QuoteStore::open_with_config(config).unwrap_err();
        assert!(matches!(
            err,
            QuoteError::Storage(StorageError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_add_appends_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        {
            let mut store = QuoteStore::open_with_config(config.clone()).unwrap();
            let record = store.add("Stay hungry.", "Motivation").unwrap();
            assert_eq!(record.text, "Stay hungry.");
            assert_eq!(store.len(), 4);
        }

        // Reopen - the added quote survives
        let store = QuoteStore::open_with_config(config).unwrap();
        assert_eq!(store.len(), 4);
        assert_eq!(store.snapshot()[3].text, "Stay hungry.");
    }

    #[test]
    fn test_add_trims_inputs() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = QuoteStore::open_with_config(test_config(&temp_dir)).unwrap();

        let record = store.add("  spaced out  ", "  Calm ").unwrap();
        assert_eq!(record.text, "spaced out");
        assert_eq!(record.category, "Calm");
    }

    #[test]
    fn test_add_rejects_blank_fields() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = QuoteStore::open_with_config(test_config(&temp_dir)).unwrap();
        let before = store.len();

        let err = store.add("   ", "Motivation").unwrap_err();
        assert!(matches!(err, QuoteError::Validation { field: "text" }));

        let err = store.add("Some text", "\t").unwrap_err();
        assert!(matches!(err, QuoteError::Validation { field: "category" }));

        assert_eq!(store.len(), before);
    }

    #[test]
    fn test_extend_is_additive_without_dedup() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = QuoteStore::open_with_config(test_config(&temp_dir)).unwrap();

        // Import a quote that already exists - it is appended anyway
        let existing = store.snapshot()[0].clone();
        let count = store
            .extend(vec![existing.clone(), QuoteRecord::new("New", "Fresh")])
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(store.len(), 5);
        assert_eq!(store.snapshot()[3], existing);
    }

    #[test]
    fn test_merge_remote_appends_only_new() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = QuoteStore::open_with_config(test_config(&temp_dir)).unwrap();

        let batch = vec![
            store.snapshot()[0].clone(),
            QuoteRecord::new("fresh from the server", "Server"),
        ];

        let appended = store.merge_remote(batch.clone()).unwrap();
        assert_eq!(appended, 1);
        assert_eq!(store.len(), 4);

        // Merging the same batch again changes nothing
        let appended = store.merge_remote(batch).unwrap();
        assert_eq!(appended, 0);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_categories_distinct_first_seen() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = QuoteStore::open_with_config(test_config(&temp_dir)).unwrap();
        store.add("Stay hungry.", "Motivation").unwrap();

        let categories = store.categories();
        assert_eq!(categories, vec!["Motivation", "Humor", "Education"]);
    }

    #[test]
    fn test_filtered_view() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = QuoteStore::open_with_config(test_config(&temp_dir)).unwrap();
        store.add("Stay hungry.", "Motivation").unwrap();

        let motivation = store.filtered("Motivation");
        assert_eq!(motivation.len(), 2);
        assert_eq!(motivation[0].text, "Believe in yourself!");
        assert_eq!(motivation[1].text, "Stay hungry.");

        let all = store.filtered(CATEGORY_ALL);
        assert_eq!(all.len(), 4);

        let missing = store.filtered("Philosophy");
        assert!(missing.is_empty());
    }

    #[test]
    fn test_selected_category_persists() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        {
            let mut store = QuoteStore::open_with_config(config.clone()).unwrap();
            assert_eq!(store.selected_category(), CATEGORY_ALL);
            store.set_selected_category("Humor").unwrap();
        }

        let store = QuoteStore::open_with_config(config).unwrap();
        assert_eq!(store.selected_category(), "Humor");
    }

    #[test]
    fn test_random_none_when_empty() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        // Persist an explicitly empty list, then reopen
        {
            let mut store = QuoteStore::open_with_config(config.clone()).unwrap();
            store.records.clear();
            store.persist().unwrap();
        }

        let store = QuoteStore::open_with_config(config).unwrap();
        assert!(store.is_empty());
        assert!(store.random().is_none());
    }

    #[test]
    fn test_random_returns_store_member() {
        let temp_dir = TempDir::new().unwrap();
        let store = QuoteStore::open_with_config(test_config(&temp_dir)).unwrap();

        for _ in 0..20 {
            let quote = store.random().unwrap();
            assert!(store.snapshot().contains(quote));
        }
    }

    #[test]
    fn test_last_viewed_is_session_scoped() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        {
            let mut store = QuoteStore::open_with_config(config.clone()).unwrap();
            assert!(store.last_viewed().is_none());

            let quote = store.snapshot()[0].clone();
            store.record_last_viewed(&quote).unwrap();
            assert_eq!(store.last_viewed().unwrap(), quote);
        }

        // A new session starts with no last-viewed quote
        let store = QuoteStore::open_with_config(config).unwrap();
        assert!(store.last_viewed().is_none());
    }
}

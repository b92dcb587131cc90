//! Quoterack Core Library
//!
//! This crate provides the core functionality for quoterack, a
//! local-first quote collection manager with best-effort remote sync.
//!
//! # Architecture
//!
//! The `QuoteStore` owns the in-memory quote list and persists a full
//! JSON snapshot through the string-keyed storage adapter on every
//! mutation. Remote sync is an existence-based merge: newly observed
//! server records are appended, nothing is ever overwritten.
//!
//! # Quick Start
//!
//! ```text
//! let mut store = QuoteStore::open()?;
//!
//! // Add a quote
//! store.add("Stay hungry.", "Motivation")?;
//!
//! // Render the filtered view
//! let lines = render::render_list(&store.filtered("Motivation"));
//! ```
//!
//! # Modules
//!
//! - `store`: the quote store (main entry point)
//! - `models`: quote record and seed data
//! - `storage`: durable and session key/value persistence
//! - `render`: list rendering and filter options
//! - `sync`: remote pull/push client and merge resolver
//! - `export`: JSON import/export
//! - `config`: application configuration

pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod render;
pub mod storage;
pub mod store;
pub mod sync;

pub use config::Config;
pub use error::{QuoteError, QuoteResult};
pub use models::{seed_quotes, QuoteRecord, CATEGORY_ALL};
pub use storage::{StorageAdapter, StorageError};
pub use store::QuoteStore;
pub use sync::{SyncClient, SyncOutcome};

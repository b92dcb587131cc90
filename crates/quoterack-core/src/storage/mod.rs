//! Storage layer
//!
//! String-keyed persistence behind the quote store:
//!
//! - **Durable**: file-per-key under the data directory, atomic writes
//! - **Session**: in-process values cleared when the run ends
//!
//! The store persists a full snapshot on every mutation; nothing is
//! incrementally diffed on disk.

pub mod adapter;
pub mod error;

pub use adapter::{
    DurableStore, SessionStore, StorageAdapter, LAST_VIEWED_KEY, QUOTES_KEY, SELECTED_CATEGORY_KEY,
};
pub use error::{StorageError, StorageResult};

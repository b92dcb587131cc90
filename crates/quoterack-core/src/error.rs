//! Error types for quote operations
//!
//! Every failure here degrades to "the operation had no effect":
//! validation and format errors are reported at the point of use and
//! never mutate the store.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors raised by store, import, and export operations
#[derive(Error, Debug)]
pub enum QuoteError {
    /// A quote field was empty after trimming
    #[error("Please enter both quote and category: {field} is empty")]
    Validation {
        /// Which field failed ("text" or "category")
        field: &'static str,
    },

    /// Import payload was not a JSON array
    #[error("Invalid file format: {0}")]
    Format(String),

    /// Underlying persistence failure
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// JSON serialization failure
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for quote operations
pub type QuoteResult<T> = Result<T, QuoteError>;

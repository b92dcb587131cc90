//! Data models for quoterack
//!
//! Defines the core `QuoteRecord` type and the filter sentinel used
//! throughout the store and render layer.

use serde::{Deserialize, Serialize};

/// Sentinel filter value meaning "show every category"
pub const CATEGORY_ALL: &str = "all";

/// A single quote with its category
///
/// Records carry no identifier; two records are the same quote exactly
/// when both text and category match. Records are immutable once
/// created and are replaced wholesale by import or merge, never edited
/// in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteRecord {
    /// The quote text
    pub text: String,
    /// Category the quote belongs to
    pub category: String,
}

impl QuoteRecord {
    /// Create a new quote record
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }
}

impl std::fmt::Display for QuoteRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" — ({})", self.text, self.category)
    }
}

/// The quotes installed on first run, before any durable state exists
pub fn seed_quotes() -> Vec<QuoteRecord> {
    vec![
        QuoteRecord::new("Believe in yourself!", "Motivation"),
        QuoteRecord::new(
            "Why did the chicken cross the road? To get to the other side!",
            "Humor",
        ),
        QuoteRecord::new("Learning never exhausts the mind.", "Education"),
    ]
}

//! Render layer
//!
//! Projects computed views of the quote store onto display lines. The
//! functions here are pure: they render exactly the view they are given
//! and never decide which subset of the store to show.

use crate::models::{QuoteRecord, CATEGORY_ALL};

/// Message shown when a rendered view has no quotes
pub const EMPTY_MESSAGE: &str = "No quotes available.";

/// Display label for the "all" filter option
pub const ALL_CATEGORIES_LABEL: &str = "All Categories";

/// Render a sequence of quotes as display lines
///
/// An empty sequence renders as a single "No quotes available." line.
pub fn render_list(records: &[QuoteRecord]) -> Vec<String> {
    if records.is_empty() {
        return vec![EMPTY_MESSAGE.to_string()];
    }

    records.iter().map(|r| r.to_string()).collect()
}

/// A selectable filter option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    /// Filter value ("all" or a category name)
    pub value: String,
    /// Display label
    pub label: String,
    /// Whether this option is the current selection
    pub selected: bool,
}

/// Build the filter option list from the derived categories
///
/// "All Categories" always comes first. The saved selection is
/// pre-selected when it is still a valid choice; otherwise the
/// selection falls back to "all".
pub fn category_options(categories: &[String], saved: &str) -> Vec<CategoryOption> {
    let saved_is_valid = saved == CATEGORY_ALL || categories.iter().any(|c| c == saved);
    let selected = if saved_is_valid { saved } else { CATEGORY_ALL };

    let mut options = vec![CategoryOption {
        value: CATEGORY_ALL.to_string(),
        label: ALL_CATEGORIES_LABEL.to_string(),
        selected: selected == CATEGORY_ALL,
    }];

    for category in categories {
        options.push(CategoryOption {
            value: category.clone(),
            label: category.clone(),
            selected: category == selected,
        });
    }

    options
}

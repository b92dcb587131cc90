//! Quote command handlers

use anyhow::{Context, Result};

use quoterack_core::render::{category_options, render_list, EMPTY_MESSAGE};
use quoterack_core::QuoteStore;

use crate::output::Output;

/// Show a random quote and record it as last viewed
pub fn show(store: &mut QuoteStore, output: &Output) -> Result<()> {
    let Some(quote) = store.random().cloned() else {
        output.message(EMPTY_MESSAGE);
        return Ok(());
    };

    store
        .record_last_viewed(&quote)
        .context("Failed to record last viewed quote")?;

    output.print_quote(&quote);
    Ok(())
}

/// List quotes for a filter selection
///
/// Uses the persisted selection unless a category is given; either way
/// the persisted selection is left untouched.
pub fn list(store: &QuoteStore, category: Option<String>, output: &Output) -> Result<()> {
    let selection = category.unwrap_or_else(|| store.selected_category().to_string());

    let view = store.filtered(&selection);
    let lines = render_list(&view);
    output.print_quotes(&view, &lines);
    Ok(())
}

/// Persist a new filter selection and render its view
pub fn filter(store: &mut QuoteStore, category: String, output: &Output) -> Result<()> {
    store
        .set_selected_category(&category)
        .context("Failed to save category selection")?;

    let view = store.filtered(&category);
    let lines = render_list(&view);
    output.print_quotes(&view, &lines);
    Ok(())
}

/// Show the category filter options with the current selection marked
pub fn categories(store: &QuoteStore, output: &Output) -> Result<()> {
    let options = category_options(&store.categories(), store.selected_category());
    output.print_category_options(&options);
    Ok(())
}

/// Add a new quote
pub fn add(store: &mut QuoteStore, text: String, category: String, output: &Output) -> Result<()> {
    let record = store.add(&text, &category)?;

    output.success("New quote added!");
    output.print_quote(&record);
    Ok(())
}

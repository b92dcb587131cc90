//! Import and export command handlers

use std::path::PathBuf;

use anyhow::{Context, Result};

use quoterack_core::export::{export_to_file, parse_import, EXPORT_FILE_NAME};
use quoterack_core::QuoteStore;

use crate::output::Output;

/// Export the full store as indented JSON
pub fn export(store: &QuoteStore, path: Option<PathBuf>, output: &Output) -> Result<()> {
    let path = path.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));

    export_to_file(store.snapshot(), &path)
        .with_context(|| format!("Failed to export quotes to {:?}", path))?;

    output.success(&format!(
        "Exported {} quote(s) to {}",
        store.len(),
        path.display()
    ));
    Ok(())
}

/// Import quotes from a JSON file
///
/// Appends every parsed record to the store; no deduplication against
/// existing quotes. A non-array payload fails without touching the store.
pub fn import(store: &mut QuoteStore, path: PathBuf, output: &Output) -> Result<()> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read import file {:?}", path))?;

    let records = parse_import(&content)?;
    let count = store.extend(records).context("Failed to import quotes")?;

    output.success(&format!("Quotes imported successfully! ({} added)", count));
    Ok(())
}

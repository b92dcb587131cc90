//! Status command handler

use anyhow::Result;

use quoterack_core::QuoteStore;

use crate::output::{Output, OutputFormat};

/// Show status information
pub fn show(store: &QuoteStore, output: &Output) -> Result<()> {
    let config = store.config();
    let categories = store.categories();

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "quotes": store.len(),
                    "categories": categories,
                    "selected_category": store.selected_category(),
                    "sync_enabled": config.sync_enabled,
                    "server_url": config.server_url,
                    "data_dir": config.data_dir
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", store.len());
        }
        OutputFormat::Human => {
            println!("Quoterack Status");
            println!("================");
            println!();
            println!("Contents:");
            println!("  Quotes:     {}", store.len());
            println!("  Categories: {}", categories.join(", "));
            println!("  Filter:     {}", store.selected_category());
            println!();
            println!("Sync:");
            println!(
                "  Status: {}",
                if config.sync_enabled {
                    "enabled"
                } else {
                    "disabled"
                }
            );
            if let Some(ref url) = config.server_url {
                println!("  Server: {}", url);
            }
            println!();
            println!("Storage:");
            println!("  Location: {}", config.data_dir.display());
        }
    }

    Ok(())
}

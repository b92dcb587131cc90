//! Quoterack CLI
//!
//! Command-line interface for quoterack - quote collection management
//! with best-effort remote sync.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use quoterack_core::{QuoteError, QuoteStore, StorageError};

mod commands;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "quoterack")]
#[command(about = "Quoterack - local-first quote collection with remote sync")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a random quote
    Show,
    /// List quotes for the current (or given) category filter
    #[command(alias = "ls")]
    List {
        /// Filter by category instead of the saved selection
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Save a category filter and show its quotes
    Filter {
        /// Category name, or "all"
        category: String,
    },
    /// List the category filter options
    Categories,
    /// Add a new quote
    Add {
        /// The quote text
        text: String,
        /// Category for the quote
        category: String,
    },
    /// Export all quotes to a JSON file
    Export {
        /// Output file (default: quotes.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import quotes from a JSON file
    Import {
        /// File to import
        file: PathBuf,
    },
    /// Sync with the remote server once
    Sync,
    /// Sync with the remote server on a fixed interval
    Watch {
        /// Seconds between sync runs (default: from config)
        #[arg(short, long)]
        interval: Option<u64>,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
    /// Show status (counts, categories, sync settings)
    Status,
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, server_url, sync_enabled, sync_interval_secs)
        key: String,
        /// Configuration value
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "quoterack=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config commands don't need the store
    if let Commands::Config { command } = &cli.command {
        return handle_config_command(command.clone(), &output);
    }

    // Open the store (seeds the quote list on first run)
    let mut store = QuoteStore::open()?;

    let result = match cli.command {
        Commands::Show => commands::quote::show(&mut store, &output),
        Commands::List { category } => commands::quote::list(&store, category, &output),
        Commands::Filter { category } => commands::quote::filter(&mut store, category, &output),
        Commands::Categories => commands::quote::categories(&store, &output),
        Commands::Add { text, category } => {
            commands::quote::add(&mut store, text, category, &output)
        }
        Commands::Export { output: path } => commands::transfer::export(&store, path, &output),
        Commands::Import { file } => commands::transfer::import(&mut store, file, &output),
        Commands::Sync => commands::sync::sync(&mut store, &output).await,
        Commands::Watch { interval } => commands::sync::watch(&mut store, interval, &output).await,
        Commands::Config { .. } => unreachable!(), // Handled above
        Commands::Status => commands::status::show(&store, &output),
    };

    if let Err(ref err) = result {
        if let Some(hint) = recovery_hint(err) {
            eprintln!("hint: {}", hint);
        }
    }

    result
}

fn handle_config_command(command: Option<ConfigCommands>, output: &Output) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(output),
        Some(ConfigCommands::Set { key, value }) => commands::config::set(key, value, output),
    }
}

/// Find a recovery suggestion for a storage failure anywhere in the chain
fn recovery_hint(err: &anyhow::Error) -> Option<&'static str> {
    err.chain().find_map(|cause| {
        if let Some(QuoteError::Storage(storage)) = cause.downcast_ref::<QuoteError>() {
            return storage.recovery_suggestion();
        }
        cause
            .downcast_ref::<StorageError>()
            .and_then(StorageError::recovery_suggestion)
    })
}

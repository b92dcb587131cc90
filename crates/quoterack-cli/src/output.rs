//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use quoterack_core::render::CategoryOption;
use quoterack_core::QuoteRecord;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Check if output is in quiet mode
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    /// Check if output is in JSON mode
    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }

    /// Print a single quote
    pub fn print_quote(&self, quote: &QuoteRecord) {
        match self.format {
            OutputFormat::Human => println!("{}", quote),
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(quote).unwrap());
            }
            OutputFormat::Quiet => println!("{}", quote.text),
        }
    }

    /// Print a rendered view of quotes
    ///
    /// `lines` is the rendered form of `records`; both views of the same
    /// sequence so JSON mode can emit structured data.
    pub fn print_quotes(&self, records: &[QuoteRecord], lines: &[String]) {
        match self.format {
            OutputFormat::Human => {
                for line in lines {
                    println!("{}", line);
                }
                if !records.is_empty() {
                    println!("\n{} quote(s)", records.len());
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(records).unwrap());
            }
            OutputFormat::Quiet => {
                for record in records {
                    println!("{}", record.text);
                }
            }
        }
    }

    /// Print the category filter options
    pub fn print_category_options(&self, options: &[CategoryOption]) {
        match self.format {
            OutputFormat::Human => {
                for option in options {
                    let marker = if option.selected { "*" } else { " " };
                    println!("{} {}", marker, option.label);
                }
            }
            OutputFormat::Json => {
                let json_options: Vec<_> = options
                    .iter()
                    .map(|o| {
                        serde_json::json!({
                            "value": o.value,
                            "label": o.label,
                            "selected": o.selected
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&json_options).unwrap());
            }
            OutputFormat::Quiet => {
                for option in options {
                    println!("{}", option.value);
                }
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Human);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Quiet);
        // Quiet takes precedence
        assert_eq!(OutputFormat::from_flags(true, true), OutputFormat::Quiet);
    }
}

//! # Output Formatting
//!
//! Every command renders through one of three formats:
//!
//! - **Text**: human-readable output with colors and indentation
//! - **JSON**: a single pretty-printed document for scripts
//! - **JSONL**: one compact JSON value per line for streaming
//!
//! ```bash
//! mdblog posts -f json | jq '.[].title'
//! mdblog toc tech hello-world -f jsonl | wc -l
//! ```

pub mod text;

use anyhow::Result;
use serde::Serialize;

/// Output format options supported by the CLI
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty text output (default on a terminal)
    Text,
    /// Single JSON document
    Json,
    /// Newline-delimited JSON
    Jsonl,
}

/// Print `value` as one pretty-printed JSON document.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print each item as one compact JSON line.
pub fn print_jsonl<T: Serialize>(items: impl IntoIterator<Item = T>) -> Result<()> {
    for item in items {
        println!("{}", serde_json::to_string(&item)?);
    }
    Ok(())
}

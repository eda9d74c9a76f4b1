//! Check command implementation

use anyhow::Result;
use colored::Colorize;
use mdblog_core::ContentResolver;

use crate::output::{OutputFormat, print_json, print_jsonl};

/// Execute the check command. Returns `true` when every post passed.
pub fn execute(resolver: &ContentResolver, format: OutputFormat) -> Result<bool> {
    let problems = resolver.check_content();

    match format {
        OutputFormat::Json => print_json(&problems)?,
        OutputFormat::Jsonl => print_jsonl(&problems)?,
        OutputFormat::Text => {
            if problems.is_empty() {
                println!("{} all posts have complete front-matter", "✓".green());
            }
            for problem in &problems {
                println!(
                    "{} {}/{}: {}",
                    "✗".red(),
                    problem.category,
                    problem.file,
                    problem.problem
                );
            }
        },
    }
    Ok(problems.is_empty())
}

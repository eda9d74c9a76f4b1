//! Facets command implementation

use anyhow::Result;
use colored::Colorize;
use mdblog_core::{ContentResolver, Facets};

use crate::output::{OutputFormat, print_json, print_jsonl};

/// Execute the facets command
pub fn execute(resolver: &ContentResolver, format: OutputFormat) -> Result<()> {
    let facets = Facets::from_posts(&resolver.list_all_posts());

    match format {
        OutputFormat::Json => print_json(&facets)?,
        OutputFormat::Jsonl => print_jsonl([&facets])?,
        OutputFormat::Text => {
            println!("{} {}", "Categories:".bold(), facets.categories.join(", "));
            println!("{} {}", "Tags:".bold(), facets.tags.join(", "));
            let series: Vec<String> = facets
                .series
                .iter()
                .map(|(id, title)| if id == title { id.clone() } else { format!("{title} ({id})") })
                .collect();
            println!("{} {}", "Series:".bold(), series.join(", "));
            let minutes: Vec<String> = facets.reading_times.iter().map(u32::to_string).collect();
            println!("{} {}", "Reading times:".bold(), minutes.join(", "));
        },
    }
    Ok(())
}

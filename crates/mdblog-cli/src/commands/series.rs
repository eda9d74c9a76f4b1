//! Series command implementation

use anyhow::{Result, bail};
use colored::Colorize;
use mdblog_core::{ContentResolver, Series, convert_series_to_toc, extract_series_from_posts, list_series};
use serde::Serialize;

use crate::output::text::render_toc;
use crate::output::{OutputFormat, print_json, print_jsonl};

#[derive(Serialize)]
struct SeriesOverview<'a> {
    id: &'a str,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    posts: usize,
}

impl<'a> From<&'a Series> for SeriesOverview<'a> {
    fn from(series: &'a Series) -> Self {
        Self {
            id: &series.id,
            title: &series.title,
            description: series.description.as_deref(),
            posts: series.posts.len(),
        }
    }
}

/// Execute the series command
pub fn execute(
    resolver: &ContentResolver,
    id: Option<&str>,
    current: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let posts = resolver.list_all_posts();

    let Some(id) = id else {
        let all = list_series(&posts);
        let overview: Vec<SeriesOverview<'_>> = all.iter().map(SeriesOverview::from).collect();
        match format {
            OutputFormat::Json => print_json(&overview)?,
            OutputFormat::Jsonl => print_jsonl(&overview)?,
            OutputFormat::Text => {
                if overview.is_empty() {
                    println!("No series found.");
                }
                for series in &overview {
                    println!(
                        "{} {} ({} posts)",
                        series.id.cyan(),
                        series.title.bold(),
                        series.posts
                    );
                }
            },
        }
        return Ok(());
    };

    let Some(series) = extract_series_from_posts(&posts, id) else {
        bail!("Series not found: {id}");
    };
    let toc = convert_series_to_toc(&series, current, &resolver.config().site.base_path);

    match format {
        OutputFormat::Json => print_json(&toc)?,
        OutputFormat::Jsonl => print_jsonl(toc.iter().flat_map(|root| root.children.iter()))?,
        OutputFormat::Text => {
            if let Some(description) = &series.description {
                println!("{}", description.bright_black());
            }
            for line in render_toc(&toc, None) {
                println!("{line}");
            }
        },
    }
    Ok(())
}

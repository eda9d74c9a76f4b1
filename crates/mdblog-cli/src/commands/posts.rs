//! Posts command implementation

use anyhow::Result;
use colored::Colorize;
use mdblog_core::{ContentResolver, PostSummary};

use crate::cli::PostsArgs;
use crate::output::text::{category_color, status_label};
use crate::output::{OutputFormat, print_json, print_jsonl};

/// Execute the posts command
pub fn execute(resolver: &ContentResolver, args: &PostsArgs, format: OutputFormat) -> Result<()> {
    let posts = resolver.list_all_posts();
    let mut rows = args.to_filter().apply(&posts);
    if let Some(limit) = args.limit {
        rows.truncate(limit);
    }
    tracing::debug!(total = posts.len(), shown = rows.len(), "filtered posts");

    match format {
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Jsonl => print_jsonl(&rows)?,
        OutputFormat::Text => print_text(&rows),
    }
    Ok(())
}

fn print_text(rows: &[PostSummary]) {
    if rows.is_empty() {
        println!("No posts found.");
        return;
    }

    for row in rows {
        let date = if row.date.is_empty() { "----------" } else { row.date.as_str() };
        println!(
            "{}  {}/{}  {}",
            date.bright_black(),
            category_color(&row.category),
            row.slug,
            row.title.bold()
        );

        let mut details = vec![
            format!("{} min", row.reading_time),
            status_label(row.status).to_string(),
            row.priority.to_string(),
        ];
        if let Some(series) = &row.series {
            let title = row.series_title.as_deref().unwrap_or(series);
            details.push(format!("series: {title}"));
        }
        if !row.tags.is_empty() {
            details.push(format!("tags: {}", row.tags.join(", ")));
        }
        println!("  {}", details.join(" · "));
    }
    println!("\n{} post(s)", rows.len());
}

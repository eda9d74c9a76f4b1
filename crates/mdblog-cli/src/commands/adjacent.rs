//! Adjacent command implementation

use anyhow::Result;
use colored::Colorize;
use mdblog_core::{AdjacentPost, ContentResolver};

use super::require_post;
use crate::output::{OutputFormat, print_json, print_jsonl};

/// Execute the adjacent command
pub fn execute(
    resolver: &ContentResolver,
    category: &str,
    slug: &str,
    format: OutputFormat,
) -> Result<()> {
    let post = require_post(resolver, category, slug)?;
    let adjacent = resolver.find_adjacent_posts(&post.category, &post.date, &post.slug);

    match format {
        OutputFormat::Json => print_json(&adjacent)?,
        OutputFormat::Jsonl => print_jsonl([&adjacent])?,
        OutputFormat::Text => {
            print_neighbour("Previous (newer)", adjacent.previous.as_ref());
            print_neighbour("Next (older)", adjacent.next.as_ref());
        },
    }
    Ok(())
}

fn print_neighbour(label: &str, post: Option<&AdjacentPost>) {
    match post {
        Some(post) => {
            let slug = post.korean_slug.as_deref().unwrap_or(&post.slug);
            println!("{label}: {} {}", post.title.bold(), format!("{}/{slug}", post.category).bright_black());
        },
        None => println!("{label}: {}", "none".bright_black()),
    }
}

//! Show command implementation

use anyhow::Result;
use colored::Colorize;
use mdblog_core::{ContentResolver, Post, PostSummary};
use serde::Serialize;

use super::require_post;
use crate::output::text::{category_color, status_label};
use crate::output::{OutputFormat, print_json, print_jsonl};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PostDetails<'a> {
    #[serde(flatten)]
    summary: PostSummary,
    headings: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
}

/// Execute the show command
pub fn execute(
    resolver: &ContentResolver,
    category: &str,
    slug: &str,
    body: bool,
    format: OutputFormat,
) -> Result<()> {
    let post = require_post(resolver, category, slug)?;
    let headings = resolver
        .table_of_contents(&post)
        .iter()
        .map(|node| node.flatten().len())
        .sum();

    let details = PostDetails {
        summary: PostSummary::from(&post),
        headings,
        content: body.then_some(post.content.as_str()),
    };

    match format {
        OutputFormat::Json => print_json(&details)?,
        OutputFormat::Jsonl => print_jsonl([&details])?,
        OutputFormat::Text => print_text(&post, headings, body),
    }
    Ok(())
}

fn print_text(post: &Post, headings: usize, body: bool) {
    println!("{}", post.title.bold());
    println!("{}", post.description);
    println!();
    println!("  Category:     {}", category_color(&post.category));
    println!("  Slug:         {}", post.slug);
    if let Some(alias) = &post.korean_slug {
        println!("  Korean slug:  {alias}");
    }
    println!("  Date:         {}", post.date);
    println!("  Status:       {}", status_label(post.status));
    println!("  Priority:     {}", post.priority);
    println!("  Reading time: {} min", post.reading_time);
    println!("  Headings:     {headings}");
    if !post.tags.is_empty() {
        println!("  Tags:         {}", post.tags.join(", "));
    }
    if let Some(series) = &post.series {
        let order = post
            .series_order
            .map_or_else(String::new, |o| format!(" (#{o})"));
        println!(
            "  Series:       {}{order}",
            post.series_title.as_deref().unwrap_or(series)
        );
    }
    for (key, value) in &post.extra {
        println!("  {key}: {}", value.to_string().bright_black());
    }
    if body {
        println!("\n{}", post.content);
    }
}

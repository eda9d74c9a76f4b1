//! Categories command implementation

use anyhow::Result;
use mdblog_core::ContentResolver;
use serde::Serialize;

use crate::output::text::category_color;
use crate::output::{OutputFormat, print_json, print_jsonl};

#[derive(Serialize)]
struct CategoryInfo {
    name: String,
    posts: usize,
}

/// Execute the categories command
pub fn execute(resolver: &ContentResolver, format: OutputFormat) -> Result<()> {
    let categories: Vec<CategoryInfo> = resolver
        .list_categories()
        .into_iter()
        .map(|name| CategoryInfo {
            posts: resolver.list_posts_by_category(&name).len(),
            name,
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&categories)?,
        OutputFormat::Jsonl => print_jsonl(&categories)?,
        OutputFormat::Text => {
            if categories.is_empty() {
                println!("No categories found under {}", resolver.storage().root().display());
            }
            for category in &categories {
                println!("{} ({})", category_color(&category.name), category.posts);
            }
        },
    }
    Ok(())
}

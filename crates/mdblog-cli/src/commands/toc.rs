//! Table-of-contents command implementation

use anyhow::Result;
use colored::Colorize;
use mdblog_core::{ContentResolver, TocNode};

use super::require_post;
use crate::output::text::render_toc;
use crate::output::{OutputFormat, print_json, print_jsonl};

/// Execute the toc command
pub fn execute(
    resolver: &ContentResolver,
    category: &str,
    slug: &str,
    max_depth: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let post = require_post(resolver, category, slug)?;
    let mut toc = resolver.table_of_contents(&post);
    if let Some(max) = max_depth {
        prune(&mut toc, max);
    }

    match format {
        OutputFormat::Json => print_json(&toc)?,
        OutputFormat::Jsonl => print_jsonl(toc.iter().flat_map(TocNode::flatten))?,
        OutputFormat::Text => {
            println!("{}", post.title.bold());
            if toc.is_empty() {
                println!("  {}", "(no headings)".bright_black());
            }
            for line in render_toc(&toc, None) {
                println!("  {line}");
            }
        },
    }
    Ok(())
}

/// Drop nodes nested deeper than `max` levels below the roots.
fn prune(nodes: &mut Vec<TocNode>, max: usize) {
    if max == 0 {
        nodes.clear();
        return;
    }
    for node in nodes {
        prune(&mut node.children, max - 1);
    }
}

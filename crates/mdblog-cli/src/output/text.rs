//! Text output helpers

use colored::{ColoredString, Colorize};
use mdblog_core::{PostStatus, TocNode};

/// ANSI-only color cycling functions for categories (exclude red)
/// Order: blue → cyan → green → yellow → magenta
const CATEGORY_COLORS: &[fn(&str) -> ColoredString] = &[
    |s| s.blue(),
    |s| s.cyan(),
    |s| s.green(),
    |s| s.yellow(),
    |s| s.magenta(),
];

/// Stable color for a category name.
pub fn category_color(category: &str) -> ColoredString {
    let index = category.bytes().map(usize::from).sum::<usize>();
    CATEGORY_COLORS[index % CATEGORY_COLORS.len()](category)
}

/// Status label colored by workflow state.
pub fn status_label(status: PostStatus) -> ColoredString {
    let label = status.as_str();
    match status {
        PostStatus::Done => label.green(),
        PostStatus::InProgress => label.yellow(),
        PostStatus::Todo => label.cyan(),
        PostStatus::Backlog => label.bright_black(),
        PostStatus::Canceled => label.red(),
    }
}

/// Render an outline as an indented bullet list, stopping below `max_depth` levels.
pub fn render_toc(nodes: &[TocNode], max_depth: Option<usize>) -> Vec<String> {
    let mut lines = Vec::new();
    render_nodes(nodes, 0, max_depth, &mut lines);
    lines
}

fn render_nodes(nodes: &[TocNode], depth: usize, max_depth: Option<usize>, out: &mut Vec<String>) {
    if max_depth.is_some_and(|max| depth >= max) {
        return;
    }
    for node in nodes {
        let indent = "  ".repeat(depth);
        let marker = match &node.link {
            Some(link) if link.is_current => "▶".green().bold().to_string(),
            _ => "-".to_string(),
        };
        let suffix = node.link.as_ref().map_or_else(
            || format!("#{}", node.id).bright_black().to_string(),
            |link| link.url.bright_black().to_string(),
        );
        out.push(format!("{indent}{marker} {} {suffix}", node.text));
        render_nodes(&node.children, depth + 1, max_depth, out);
    }
}

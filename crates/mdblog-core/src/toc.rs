//! Table-of-contents extraction from markdown bodies.
//!
//! Only ATX headings (`#` through `######` followed by a space) are recognised; setext
//! underlines are not. Headings become a forest of [`TocNode`]s where every node
//! hangs under the closest preceding heading of a smaller level. A heading with no
//! such predecessor starts a new root.
//!
//! ```rust
//! use mdblog_core::toc::build_table_of_contents;
//!
//! let toc = build_table_of_contents("# A\n## B\n### C\n## D");
//! assert_eq!(toc.len(), 1);
//! assert_eq!(toc[0].children.len(), 2);
//! assert_eq!(toc[0].children[0].children[0].text, "C");
//! ```

use crate::cache::{CacheStats, TtlCache};
use crate::clock::Clock;
use crate::types::TocNode;
use regex::Regex;
use sha2::{Digest, Sha256};
use std::sync::{Arc, LazyLock};
use std::time::Duration;
use tracing::debug;

#[allow(clippy::unwrap_used)]
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,6})[ \t]+(.+)$").unwrap());

/// Cached outline builder.
#[derive(Debug)]
pub struct TocBuilder {
    cache: TtlCache<Vec<TocNode>>,
}

impl TocBuilder {
    /// Builder whose outlines live for `ttl`.
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            cache: TtlCache::new("toc", ttl, clock),
        }
    }

    /// Outline of `body`, cached under `key` or, without one, under a hash of the body.
    ///
    /// A caller key is trusted: a changed body under the same key keeps returning the
    /// cached outline until it expires or the cache is cleared.
    pub fn build(&self, body: &str, key: Option<&str>) -> Vec<TocNode> {
        let cache_key = match key {
            Some(key) => format!("toc:{key}"),
            None => format!("toc:{}", content_fingerprint(body)),
        };
        self.cache
            .get_or_insert_with(&cache_key, || build_table_of_contents(body))
    }

    /// Drop every cached outline.
    pub fn invalidate_all(&self) {
        self.cache.clear();
    }

    /// Hit/miss counters of the outline cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

/// Hex SHA-256 of the whole body.
pub fn content_fingerprint(body: &str) -> String {
    format!("{:x}", Sha256::digest(body.as_bytes()))
}

/// Headings of `body` in document order, without nesting.
pub fn extract_headings(body: &str) -> Vec<TocNode> {
    HEADING_RE
        .captures_iter(body)
        .filter_map(|caps| {
            let level = u8::try_from(caps.get(1)?.as_str().len()).ok()?;
            let text = caps.get(2)?.as_str().trim();
            (!text.is_empty()).then(|| TocNode::new(heading_id(text), text, level))
        })
        .collect()
}

/// Nested outline of `body`. Empty when there are no headings.
pub fn build_table_of_contents(body: &str) -> Vec<TocNode> {
    let headings = extract_headings(body);
    debug!(headings = headings.len(), "building table of contents");

    let mut roots = Vec::new();
    for heading in headings {
        attach(&mut roots, heading);
    }
    roots
}

/// Anchor id for a heading.
///
/// Lowercases, keeps ASCII word characters, whitespace and Hangul syllables, then
/// turns each whitespace run into one `-`. Identical headings get identical ids.
pub fn heading_id(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|&c| {
            c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() || is_hangul_syllable(c)
        })
        .collect();

    let mut id = String::with_capacity(kept.len());
    let mut in_space = false;
    for c in kept.chars() {
        if c.is_whitespace() {
            if !in_space {
                id.push('-');
            }
            in_space = true;
        } else {
            id.push(c);
            in_space = false;
        }
    }
    id
}

const fn is_hangul_syllable(c: char) -> bool {
    matches!(c, '\u{AC00}'..='\u{D7A3}')
}

fn attach(roots: &mut Vec<TocNode>, node: TocNode) {
    if node.level > 1 {
        if let Some(path) = parent_path(roots, node.level) {
            if let Some(parent) = node_at_mut(roots, &path) {
                parent.children.push(node);
                return;
            }
        }
    }
    roots.push(node);
}

/// Index path of the most recent node (in document order) with a level below `level`.
///
/// Walks siblings from the end and looks inside each subtree before the subtree's
/// own root, which is reverse document order.
fn parent_path(nodes: &[TocNode], level: u8) -> Option<Vec<usize>> {
    for (index, node) in nodes.iter().enumerate().rev() {
        if let Some(mut path) = parent_path(&node.children, level) {
            path.insert(0, index);
            return Some(path);
        }
        if node.level < level {
            return Some(vec![index]);
        }
    }
    None
}

fn node_at_mut<'a>(nodes: &'a mut [TocNode], path: &[usize]) -> Option<&'a mut TocNode> {
    let (first, rest) = path.split_first()?;
    let mut node = nodes.get_mut(*first)?;
    for &index in rest {
        node = node.children.get_mut(index)?;
    }
    Some(node)
}

//! Command implementations for the mdblog CLI
//!
//! Each command lives in its own submodule and works against a shared
//! [`ContentResolver`](mdblog_core::ContentResolver).

mod adjacent;
mod categories;
mod check;
mod facets;
mod posts;
mod series;
mod show;
mod toc;

pub use adjacent::execute as show_adjacent;
pub use categories::execute as list_categories;
pub use check::execute as check_content;
pub use facets::execute as show_facets;
pub use posts::execute as list_posts;
pub use series::execute as show_series;
pub use show::execute as show_post;
pub use toc::execute as show_toc;

use anyhow::{Result, bail};
use mdblog_core::{ContentResolver, Post};

/// Resolve a post or fail with a message naming what was looked up.
pub(crate) fn require_post(resolver: &ContentResolver, category: &str, slug: &str) -> Result<Post> {
    match resolver.find_post_by_slug(category, slug) {
        Some(post) => Ok(post),
        None => bail!("Post not found: {category}/{slug}"),
    }
}

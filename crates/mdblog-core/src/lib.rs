//! # mdblog-core
//!
//! Content resolution for a markdown/MDX blog: discovering posts on disk, parsing their
//! front-matter, resolving slugs (including Korean alias slugs), building tables of
//! contents and assembling series navigation.
//!
//! ## Architecture
//!
//! - **Storage**: cached directory listings and file reads under the content root
//! - **Cache**: TTL key/value cache driven by an injectable [`Clock`]
//! - **Content**: post parsing, defaults, reading time, sorting and slug resolution
//! - **TOC**: heading extraction and nesting
//! - **Series**: grouping posts into ordered reading lists
//!
//! Data flows one way: [`Storage`] → [`ContentResolver`] → outlines and series for
//! whatever renders them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mdblog_core::{BlogConfig, ContentResolver};
//!
//! let config = BlogConfig::from_env_or_default()?;
//! let resolver = ContentResolver::new(config);
//!
//! for post in resolver.list_all_posts() {
//!     println!("{} {} ({} min)", post.date, post.title, post.reading_time);
//! }
//!
//! if let Some(post) = resolver.find_post_by_slug("tech", "소유권") {
//!     let toc = resolver.table_of_contents(&post);
//!     println!("{} top-level sections", toc.len());
//! }
//! # Ok::<(), mdblog_core::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Resolver and storage lookups never fail: problems are logged through `tracing` and
//! the lookup yields an empty list or `None`. Configuration loading returns
//! [`Result<T, Error>`].

/// TTL key/value cache
pub mod cache;
/// Time source for cache expiry
pub mod clock;
/// Configuration loading and environment overrides
pub mod config;
/// Post resolution, sorting and adjacency
pub mod content;
/// Error types and result aliases
pub mod error;
/// Post table filtering and facets
pub mod filter;
/// Front-matter splitting and schema
pub mod front_matter;
/// Series grouping and navigation
pub mod series;
/// Cached filesystem access to the content root
pub mod storage;
/// Table-of-contents building
pub mod toc;
/// Core data types
pub mod types;

pub use cache::{CacheStats, TtlCache};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::BlogConfig;
pub use content::{
    ContentProblem, ContentResolver, PostParams, compare_by_date_desc, reading_time,
};
pub use error::{Error, Result};
pub use filter::{Facets, PostFilter, PostSummary};
pub use front_matter::{FrontMatter, split_front_matter};
pub use series::{convert_series_to_toc, extract_series_from_posts, list_series};
pub use storage::{ContentSource, FsSource, Storage};
pub use toc::{TocBuilder, build_table_of_contents, heading_id};
pub use types::*;

//! # CLI Structure and Argument Parsing
//!
//! Command-line interface for `mdblog`, built with `clap` derive macros.
//!
//! ## Usage Patterns
//!
//! ```bash
//! # Browse
//! mdblog posts --tag rust --status done
//! mdblog categories
//! mdblog show tech 소유권
//!
//! # Navigation data
//! mdblog toc tech hello-world
//! mdblog series rust-basics --current ownership
//! mdblog adjacent tech hello-world
//!
//! # Authoring checks (exit code 1 on problems)
//! mdblog check
//! ```
//!
//! ## Output Formats
//!
//! - **text**: human-readable, colored when writing to a terminal
//! - **json**: one pretty-printed document (default when stdout is piped)
//! - **jsonl**: one compact JSON value per line

use clap::{Args, Parser, Subcommand};
use mdblog_core::{PostFilter, PostPriority, PostStatus};
use std::path::PathBuf;

use crate::utils::cli_args::FormatArg;

/// Main CLI structure for the `mdblog` command
#[derive(Parser, Clone, Debug)]
#[command(name = "mdblog")]
#[command(version)]
#[command(about = "mdblog - inspect posts, outlines and series of a markdown blog", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Content root holding one directory per category. Also via `MDBLOG_CONTENT_DIR`.
    #[arg(long, global = true, value_name = "DIR", env = "MDBLOG_CONTENT_DIR")]
    pub root: Option<PathBuf>,

    /// Path to configuration file (overrides the platform default). Also via `MDBLOG_CONFIG`.
    #[arg(long, global = true, value_name = "FILE", env = "MDBLOG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show debug-level log messages
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Log cache and resolution details
    #[arg(long, global = true)]
    pub debug: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub format: FormatArg,
}

/// Available subcommands
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// List posts, newest first
    #[command(alias = "ls")]
    Posts(PostsArgs),

    /// List categories with their post counts
    Categories,

    /// Show one post's metadata (accepts a Korean alias slug)
    Show {
        /// Category directory
        category: String,
        /// Filename slug or Korean alias
        slug: String,
        /// Include the markdown body
        #[arg(long)]
        body: bool,
    },

    /// Print a post's table of contents
    Toc {
        /// Category directory
        category: String,
        /// Filename slug or Korean alias
        slug: String,
        /// Hide headings nested deeper than this many levels
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,
    },

    /// Show a series' reading order, or list every series when no id is given
    Series {
        /// Series id as written in `series:` front-matter
        id: Option<String>,
        /// Mark this slug as the one being read
        #[arg(long, value_name = "SLUG")]
        current: Option<String>,
    },

    /// Show the newer and older neighbours of a post within its category
    Adjacent {
        /// Category directory
        category: String,
        /// Filename slug or Korean alias
        slug: String,
    },

    /// List distinct categories, series, tags and reading times
    Facets,

    /// Report posts with unreadable or incomplete front-matter
    Check,
}

/// Filters for the `posts` command. Repeated flags are any-of; different flags combine.
#[derive(Args, Clone, Debug, Default)]
pub struct PostsArgs {
    /// Only posts in this category
    #[arg(long, short = 'c')]
    pub category: Vec<String>,

    /// Only posts with this tag
    #[arg(long, short = 't')]
    pub tag: Vec<String>,

    /// Only posts with this status (backlog, todo, "in progress", done, canceled)
    #[arg(long)]
    pub status: Vec<PostStatus>,

    /// Only posts with this priority (low, medium, high)
    #[arg(long)]
    pub priority: Vec<PostPriority>,

    /// Only posts in this series
    #[arg(long)]
    pub series: Vec<String>,

    /// Only posts with this reading time in minutes
    #[arg(long, value_name = "MINUTES")]
    pub reading_time: Vec<u32>,

    /// Case-insensitive title search
    #[arg(long, value_name = "QUERY")]
    pub title: Option<String>,

    /// Stop after this many posts
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

impl PostsArgs {
    /// Translate flags into a core filter.
    pub fn to_filter(&self) -> PostFilter {
        PostFilter {
            title: self.title.clone(),
            categories: self.category.clone(),
            series: self.series.clone(),
            tags: self.tag.clone(),
            statuses: self.status.clone(),
            priorities: self.priority.clone(),
            reading_times: self.reading_time.clone(),
        }
    }
}

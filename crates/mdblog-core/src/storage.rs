//! Cached read access to the content root.
//!
//! The content root holds one directory per category and, inside each, one file per
//! post:
//!
//! ```text
//! <root>/
//!   tech/
//!     hello-world.mdx
//!     second-post.md
//!   life/
//!     my-story.mdx
//! ```
//!
//! [`Storage`] answers three questions (which categories exist, which post files a
//! category holds, what a file contains) and caches each answer in its own
//! [`TtlCache`] namespace. Failures are absorbed: a missing root is an empty category
//! list, an unreadable file is `None`. Failed lookups are not cached.

use crate::cache::TtlCache;
use crate::clock::{Clock, SystemClock};
use crate::config::BlogConfig;
use crate::{Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Filesystem operations the storage layer needs.
///
/// [`FsSource`] is the real implementation; tests can provide an in-memory one.
pub trait ContentSource: Send + Sync + std::fmt::Debug {
    /// Names of the entries directly under `path`.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<String>>;
    /// Whether `path` is a directory. Any error counts as "no".
    fn is_dir(&self, path: &Path) -> bool;
    /// Full UTF-8 contents of the file at `path`.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// [`ContentSource`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSource;

impl ContentSource for FsSource {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect()
    }

    fn is_dir(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok_and(|m| m.is_dir())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

/// Cached accessor for categories, post files and raw file text.
#[derive(Debug)]
pub struct Storage {
    root: PathBuf,
    extensions: Vec<String>,
    source: Arc<dyn ContentSource>,
    categories: TtlCache<Vec<String>>,
    files: TtlCache<Vec<String>>,
    contents: TtlCache<String>,
}

impl Storage {
    /// Storage over `root` on the real filesystem with default settings.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let mut config = BlogConfig::default();
        config.content.root = root.into();
        Self::from_config(&config, Arc::new(SystemClock))
    }

    /// Storage configured from `config` on the real filesystem.
    pub fn from_config(config: &BlogConfig, clock: Arc<dyn Clock>) -> Self {
        Self::with_source(
            config.content.root.clone(),
            config.content.extensions.clone(),
            Arc::new(FsSource),
            config.cache.storage_ttl(),
            clock,
        )
    }

    /// Fully explicit constructor.
    pub fn with_source(
        root: PathBuf,
        extensions: Vec<String>,
        source: Arc<dyn ContentSource>,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            root,
            extensions,
            source,
            categories: TtlCache::new("categories", ttl, Arc::clone(&clock)),
            files: TtlCache::new("files", ttl, Arc::clone(&clock)),
            contents: TtlCache::new("content", ttl, clock),
        }
    }

    /// Content root this storage reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether `file_name` carries one of the configured post extensions.
    pub fn is_post_file(&self, file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext))
    }

    /// Strip the post extension from `file_name`, giving the filename slug.
    pub fn slug_of<'a>(&self, file_name: &'a str) -> &'a str {
        match file_name.rsplit_once('.') {
            Some((stem, ext)) if self.extensions.iter().any(|allowed| allowed == ext) => stem,
            _ => file_name,
        }
    }

    /// Category directories directly under the root, sorted by name.
    ///
    /// A missing or unreadable root yields an empty list.
    pub fn list_categories(&self) -> Vec<String> {
        match self
            .categories
            .try_get_or_insert_with("categories", || self.scan_categories())
        {
            Ok(categories) => categories,
            Err(e) => {
                warn!(root = %self.root.display(), error_category = e.category(), error = %e, "failed to list categories");
                Vec::new()
            },
        }
    }

    fn scan_categories(&self) -> Result<Vec<String>> {
        let mut categories: Vec<String> = self
            .source
            .read_dir(&self.root)?
            .into_iter()
            .filter(|name| !name.starts_with('.'))
            .filter(|name| self.source.is_dir(&self.root.join(name)))
            .collect();
        categories.sort();
        debug!(count = categories.len(), "scanned categories");
        Ok(categories)
    }

    /// Post files (`.md`/`.mdx` by default) in `category`, sorted by name.
    ///
    /// Unknown or invalid categories yield an empty list.
    pub fn list_post_files(&self, category: &str) -> Vec<String> {
        let key = format!("files:{category}");
        match self
            .files
            .try_get_or_insert_with(&key, || self.scan_post_files(category))
        {
            Ok(files) => files,
            Err(e) => {
                debug!(category, error_category = e.category(), error = %e, "no post files");
                Vec::new()
            },
        }
    }

    fn scan_post_files(&self, category: &str) -> Result<Vec<String>> {
        validate_segment(category)?;
        let dir = self.root.join(category);
        let mut files: Vec<String> = self
            .source
            .read_dir(&dir)?
            .into_iter()
            .filter(|name| !name.starts_with('.') && self.is_post_file(name))
            .collect();
        files.sort();
        Ok(files)
    }

    /// Raw text of `category/file_name`, or `None` when it cannot be read.
    pub fn read_file(&self, category: &str, file_name: &str) -> Option<String> {
        let key = format!("content:{category}/{file_name}");
        match self
            .contents
            .try_get_or_insert_with(&key, || self.load_file(category, file_name))
        {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(category, file = file_name, error_category = e.category(), error = %e, "failed to read post file");
                None
            },
        }
    }

    /// Read one file, retrying once after an interrupted or timed-out read.
    fn load_file(&self, category: &str, file_name: &str) -> Result<String> {
        validate_segment(category)?;
        validate_segment(file_name)?;
        let path = self.root.join(category).join(file_name);
        match self.source.read_to_string(&path).map_err(Error::from) {
            Err(e) if e.is_recoverable() => {
                debug!(path = %path.display(), error = %e, "retrying transient read failure");
                Ok(self.source.read_to_string(&path)?)
            },
            other => other,
        }
    }

    /// Clear every storage cache namespace.
    pub fn invalidate_all(&self) {
        self.categories.clear();
        self.files.clear();
        self.contents.clear();
        info!(root = %self.root.display(), "storage caches invalidated");
    }
}

/// Reject names that would escape the content root or address hidden files.
pub fn validate_segment(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidPath("name cannot be empty".into()));
    }

    if name.contains("..") || name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidPath(format!(
            "'{name}' contains path traversal characters"
        )));
    }

    if name.starts_with('.') || name.contains('\0') {
        return Err(Error::InvalidPath(format!(
            "'{name}' contains invalid filesystem characters"
        )));
    }

    Ok(())
}

//! Configuration for content resolution.
//!
//! Settings live in a TOML file (`mdblog.toml` by default) and every section has
//! sensible defaults, so a missing file is not an error. A handful of environment
//! variables override the file for deploy hooks and tests.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [content]
//! root = "app/blog"
//! extensions = ["md", "mdx"]
//!
//! [cache]
//! ttl_secs = 3600
//! post_ttl_secs = 600
//!
//! [reading]
//! words_per_minute = 200
//!
//! [site]
//! base_path = "/blog"
//!
//! [front_matter]
//! strict = false
//! ```
//!
//! ## Environment Overrides
//!
//! - `MDBLOG_CONFIG`: path of the TOML file to load
//! - `MDBLOG_CONTENT_DIR`: replaces `content.root`
//! - `MDBLOG_CACHE_TTL_SECS`: replaces `cache.ttl_secs`

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "MDBLOG_CONFIG";
/// Environment variable overriding the content root.
pub const CONTENT_DIR_ENV: &str = "MDBLOG_CONTENT_DIR";
/// Environment variable overriding the default cache TTL.
pub const CACHE_TTL_ENV: &str = "MDBLOG_CACHE_TTL_SECS";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Where posts live and which files count as posts.
    pub content: ContentConfig,
    /// Cache lifetimes per namespace.
    pub cache: CacheConfig,
    /// Reading-time estimation.
    pub reading: ReadingConfig,
    /// URL shaping for navigation entries.
    pub site: SiteConfig,
    /// Front-matter validation policy.
    pub front_matter: FrontMatterConfig,
}

/// Content root settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding one subdirectory per category.
    pub root: PathBuf,
    /// File extensions (without the dot) recognised as posts.
    pub extensions: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("content"),
            extensions: vec!["md".to_string(), "mdx".to_string()],
        }
    }
}

/// Cache lifetimes.
///
/// Raw file data, resolved posts and outlines are cached in separate namespaces so they
/// can expire independently; the per-namespace values fall back to `ttl_secs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// TTL for directory listings and raw file text.
    pub ttl_secs: u64,
    /// TTL for resolved posts and slug alias maps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_ttl_secs: Option<u64>,
    /// TTL for table-of-contents outlines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toc_ttl_secs: Option<u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 3600,
            post_ttl_secs: None,
            toc_ttl_secs: None,
        }
    }
}

impl CacheConfig {
    /// TTL for the storage namespaces.
    pub const fn storage_ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    /// TTL for resolved posts.
    pub fn post_ttl(&self) -> Duration {
        Duration::from_secs(self.post_ttl_secs.unwrap_or(self.ttl_secs))
    }

    /// TTL for outlines.
    pub fn toc_ttl(&self) -> Duration {
        Duration::from_secs(self.toc_ttl_secs.unwrap_or(self.ttl_secs))
    }
}

/// Reading-time estimation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingConfig {
    /// Average reading speed used when a post does not declare `readingTime`.
    pub words_per_minute: u32,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            words_per_minute: 200,
        }
    }
}

/// Site-level URL settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Path prefix of post pages, e.g. `/blog` → `/blog/{category}/{slug}`.
    pub base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: "/blog".to_string(),
        }
    }
}

/// Front-matter validation policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatterConfig {
    /// Skip posts missing `title`, `date` or `description` instead of keeping them
    /// with empty values. Either way the problem is logged.
    pub strict: bool,
}

impl BlogConfig {
    /// Load configuration from `path`, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the config file (`MDBLOG_CONFIG`, else the platform default), load it,
    /// then apply environment overrides.
    pub fn from_env_or_default() -> Result<Self> {
        let path = match std::env::var_os(CONFIG_ENV) {
            Some(p) if !p.is_empty() => Some(PathBuf::from(p)),
            _ => Self::default_config_path(),
        };

        let mut config = match path {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `MDBLOG_CONTENT_DIR` and `MDBLOG_CACHE_TTL_SECS` on top of loaded values.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(dir) = std::env::var(CONTENT_DIR_ENV) {
            let trimmed = dir.trim();
            if !trimmed.is_empty() {
                self.content.root = PathBuf::from(trimmed);
            }
        }

        if let Ok(ttl) = std::env::var(CACHE_TTL_ENV) {
            self.cache.ttl_secs = ttl.trim().parse().map_err(|e| {
                Error::Config(format!("Invalid {CACHE_TTL_ENV} value '{ttl}': {e}"))
            })?;
        }

        self.validate()
    }

    /// Platform config location: `<config dir>/mdblog/mdblog.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "mdblog", "mdblog")
            .map(|dirs| dirs.config_dir().join("mdblog.toml"))
    }

    fn validate(&self) -> Result<()> {
        if self.reading.words_per_minute == 0 {
            return Err(Error::Config(
                "reading.words_per_minute must be greater than zero".into(),
            ));
        }
        if self.content.extensions.is_empty() {
            return Err(Error::Config(
                "content.extensions must list at least one extension".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_values() {
        // Given: Default configuration is requested
        let config = BlogConfig::default();

        // Then: Should have sensible defaults
        assert_eq!(config.content.root, PathBuf::from("content"));
        assert_eq!(config.content.extensions, vec!["md", "mdx"]);
        assert_eq!(config.cache.ttl_secs, 3600);
        assert_eq!(config.cache.post_ttl(), Duration::from_secs(3600));
        assert_eq!(config.cache.toc_ttl(), Duration::from_secs(3600));
        assert_eq!(config.reading.words_per_minute, 200);
        assert_eq!(config.site.base_path, "/blog");
        assert!(!config.front_matter.strict);
    }

    #[test]
    fn test_config_save_and_load_roundtrip() -> Result<()> {
        // Given: A temporary directory and a customised configuration
        let temp_dir = TempDir::new().map_err(|e| Error::Config(e.to_string()))?;
        let path = temp_dir.path().join("nested").join("mdblog.toml");
        let mut original = BlogConfig::default();
        original.content.root = PathBuf::from("/srv/blog");
        original.cache.post_ttl_secs = Some(60);
        original.front_matter.strict = true;

        // When: Saving and then loading the configuration
        original.save(&path)?;
        let loaded = BlogConfig::load(&path)?;

        // Then: Configurations should be identical
        assert_eq!(loaded, original);
        assert_eq!(loaded.cache.post_ttl(), Duration::from_secs(60));
        Ok(())
    }

    #[test]
    fn test_config_load_missing_file_uses_defaults() {
        let config = BlogConfig::load(Path::new("/definitely/does/not/exist/mdblog.toml"));
        assert_eq!(config.unwrap(), BlogConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mdblog.toml");
        fs::write(&path, "[content]\nroot = \"posts\"\n").unwrap();

        let config = BlogConfig::load(&path).unwrap();
        assert_eq!(config.content.root, PathBuf::from("posts"));
        assert_eq!(config.content.extensions, vec!["md", "mdx"]);
        assert_eq!(config.reading.words_per_minute, 200);
    }

    #[test]
    fn test_config_parse_invalid_toml() {
        // Given: Invalid TOML content
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("invalid.toml");
        fs::write(&path, "this is not valid toml [[[").unwrap();

        // When: Attempting to load
        let result = BlogConfig::load(&path);

        // Then: Should return a serialization error
        match result {
            Err(err @ Error::Serialization(_)) => assert_eq!(err.category(), "serialization"),
            other => panic!("Expected Serialization error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_words_per_minute_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mdblog.toml");
        fs::write(&path, "[reading]\nwords_per_minute = 0\n").unwrap();

        assert!(matches!(BlogConfig::load(&path), Err(Error::Config(_))));
    }

    proptest! {
        #[test]
        fn test_cache_ttl_roundtrip(ttl in 1u64..=7 * 24 * 3600) {
            let mut config = BlogConfig::default();
            config.cache.ttl_secs = ttl;

            let serialized = toml::to_string(&config).unwrap();
            let parsed: BlogConfig = toml::from_str(&serialized).unwrap();
            prop_assert_eq!(parsed.cache.storage_ttl(), Duration::from_secs(ttl));
        }
    }
}

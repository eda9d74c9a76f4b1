//! Error types and handling for mdblog-core operations.
//!
//! Internal helpers return [`Result<T, Error>`] and propagate with `?`. The public
//! resolver entry points ([`crate::ContentResolver`], [`crate::Storage`]) absorb these
//! errors instead: a broken post must never take down a listing page, so they log the
//! error (with its [`Error::category`]) and hand back an empty list or `None`.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: directory listing and file reads under the content root
//! - **Front-matter Errors**: malformed YAML or missing required keys
//! - **Path Errors**: category or file names that would escape the content root
//! - **Configuration Errors**: invalid settings in `mdblog.toml` or the environment
//! - **Serialization Errors**: `mdblog.toml` that is not valid TOML, or cannot be written as TOML
//!
//! ```rust
//! use mdblog_core::Error;
//!
//! let err = Error::NotFound("tech/missing".into());
//! assert_eq!(err.category(), "not_found");
//! assert!(!err.is_recoverable());
//! ```

use thiserror::Error;

/// The main error type for mdblog-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers directory listings, directory checks and file reads. The underlying
    /// `std::io::Error` is preserved so callers can inspect the kind.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A post's front-matter block is malformed or incomplete.
    ///
    /// ## Common Causes
    ///
    /// - Invalid YAML syntax between the `---` fences
    /// - Missing `title`, `date` or `description`
    /// - Wrong value types (e.g. `readingTime: soon`)
    #[error("Front-matter error in {file}: {reason}")]
    FrontMatter {
        /// `category/filename` of the offending post.
        file: String,
        /// What was wrong with the block.
        reason: String,
    },

    /// Configuration values are invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A category or file name was rejected before touching the filesystem.
    ///
    /// Raised for empty names, names containing `..`, path separators or NUL bytes,
    /// and hidden names starting with `.`.
    #[error("Invalid path segment: {0}")]
    InvalidPath(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Check if the error might go away if the operation is retried.
    ///
    /// Only interrupted or timed-out I/O counts; a missing file or a malformed
    /// front-matter block stays broken until the content changes. [`crate::Storage`]
    /// retries a read once when this holds.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
            ),
            _ => false,
        }
    }

    /// Get the error category as a string identifier.
    ///
    /// Used as the `error_category` field on `tracing` events so absorbed failures can
    /// be grouped in logs.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::FrontMatter { .. } => "front_matter",
            Self::Config(_) => "config",
            Self::NotFound(_) => "not_found",
            Self::InvalidPath(_) => "invalid_path",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T, E = Error> = std::result::Result<T, E>;

//! Error types for bundle validation
//!
//! Anything in here aborts a run. Problems with the bundle's content are
//! recorded in the [`Report`](plugcheck_types::Report) instead.

use std::path::PathBuf;
use thiserror::Error;

/// The manifest could not be loaded, so no further checks are possible
#[derive(Debug, Error)]
pub enum ManifestError {
    /// No manifest at the expected location
    #[error("{} not found", .path.display())]
    NotFound {
        /// Manifest path relative to the bundle root
        path: PathBuf,
    },

    /// File exists but is not a JSON object
    #[error("{} is not valid: {reason}", .path.display())]
    Invalid {
        /// Manifest path relative to the bundle root
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// Reading the file failed for a reason other than absence
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Manifest path relative to the bundle root
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// Unexpected failures while walking a bundle
#[derive(Debug, Error)]
pub enum BundleError {
    /// Filesystem access failed
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Manifest could not be read at all
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Name pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

impl BundleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BundleError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, BundleError>;

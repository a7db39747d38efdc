//! Error types for filterlist-core

use std::path::PathBuf;

/// Result type for filterlist-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building artifacts
///
/// Every variant is fatal for the run: the builder stops at the first error
/// and leaves already written artifacts in place.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Source directory does not exist or is not a directory
    #[error("Source directory not found at {path}")]
    SourceDirMissing { path: PathBuf },

    /// A source file name has no usable stem to derive a filter name from
    #[error("Cannot derive a filter name from source file '{file}'")]
    InvalidSourceName { file: String },

    /// Filesystem error from filterlist-fs
    #[error(transparent)]
    Fs(#[from] filterlist_fs::Error),
}

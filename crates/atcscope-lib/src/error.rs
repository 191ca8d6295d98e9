use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the atcscope library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Per-file problems during loading (unreadable file, invalid JSON, wrong
/// top-level shape) never surface here; they are recorded on
/// [`crate::ControllerIndex::skipped`] and the load continues.
#[derive(Debug, Error)]
pub enum Error {
    /// Data directory could not be located at the resolved path.
    #[error("data directory not found at {path}")]
    DataDirNotFound { path: PathBuf },

    /// The configured data path exists but is not a directory.
    #[error("data path {path} is not a directory")]
    NotADirectory { path: PathBuf },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

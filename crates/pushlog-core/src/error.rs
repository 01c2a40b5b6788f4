//! Error types for pushlog-core.

use std::path::PathBuf;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pushlog-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Config file exists but is not valid TOML for the expected schema.
    #[error("failed to parse {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

//! Loading of the local `.env` file.

use std::path::Path;

/// What happened when looking for the env file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvFile {
    /// File was read; variables not already set were added to the environment.
    Loaded,
    /// No file at the given path.
    Missing,
    /// File exists but could not be parsed or read.
    Invalid,
}

/// Load variables from `path` without overriding the process environment.
///
/// Never fails: a missing file is normal and an unreadable one only warrants a warning.
pub fn load(path: &Path) -> EnvFile {
    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "loaded env file");
            EnvFile::Loaded
        }
        Err(e) if e.not_found() => {
            tracing::debug!(path = %path.display(), "no env file");
            EnvFile::Missing
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring env file");
            EnvFile::Invalid
        }
    }
}

//! # pushlog-core
//!
//! Core library for pushlog: flags commits that were pushed to a repository
//! but no longer appear in its history, and loads `pushlog.toml`.

pub mod config;
pub mod detect;
pub mod error;

pub use config::{Config, DEFAULT_CONFIG_FILE};
pub use detect::{DetectionSummary, find_deleted_commits, summarize};
pub use error::{Error, Result};

//! # pushlog-github
//!
//! Read-only GitHub REST API client for pushlog: a user's repositories, a
//! repository's commits, and its public event feed.
//!
//! # Security
//!
//! Authentication tokens are stored using `SecretString` which automatically
//! zeroizes memory when dropped, reducing credential exposure in memory dumps.

mod auth;
mod client;
mod error;
mod traits;
mod types;

pub use auth::{Auth, DEFAULT_TOKEN_ENV};
pub use client::GitHubClient;
pub use error::{Error, Result};
// Re-export SecretString for constructing Auth::Token
pub use secrecy::SecretString;
pub use traits::GitHubApi;
pub use types::{Commit, Event, EventPayload, Repository};

//! Trait abstractions for GitHub API operations.
//!
//! This module defines the `GitHubApi` trait which abstracts the read-only
//! calls a scan needs, so services can be tested against in-memory data.

use crate::{Commit, Event, Repository, Result};

/// Trait for GitHub API operations.
///
/// Each method issues a single request and returns only the first page the
/// API hands back.
pub trait GitHubApi: Send + Sync {
    /// List repositories owned by a user.
    fn list_repositories(
        &self,
        username: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Repository>>> + Send;

    /// List commits on a repository's default branch.
    fn list_commits(
        &self,
        owner: &str,
        repo: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Commit>>> + Send;

    /// List public events for a repository.
    fn list_events(
        &self,
        owner: &str,
        repo: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Event>>> + Send;
}

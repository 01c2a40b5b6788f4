//! Scan service: pick a repository and flag pushed commits missing from its history.
//!
//! This service encapsulates the interactive flow of the scan command,
//! accepting a `GitHubApi` implementation for testability.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use pushlog_core::summarize;
use pushlog_github::{GitHubApi, Repository};
use serde::Serialize;

use crate::output;
use crate::prompt::Prompt;

/// Failures caused by user input rather than by GitHub.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScanError {
    /// No username was entered.
    #[error("No username given")]
    EmptyUsername,

    /// `--repo` was given but blank.
    #[error("No repository name given")]
    EmptyRepository,

    /// The user has no repositories visible to the token.
    #[error("No repositories found for {0}")]
    NoRepositories(String),

    /// Menu answer was not a listed number.
    #[error("Invalid selection: '{input}' (expected a number from 1 to {count})")]
    InvalidSelection { input: String, count: usize },
}

/// What the caller already knows; anything missing is asked for.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanRequest<'a> {
    pub username: Option<&'a str>,
    pub repository: Option<&'a str>,
}

/// Result of scanning one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub owner: String,
    pub repository: String,
    pub commits_checked: usize,
    pub events_checked: usize,
    pub push_events: usize,
    pub pushed_commits: usize,
    pub deleted: Vec<String>,
}

/// Service for scan operations with trait-based dependencies.
pub struct ScanService<'a, H: GitHubApi> {
    client: &'a H,
}

#[allow(clippy::future_not_send)]
impl<'a, H: GitHubApi> ScanService<'a, H> {
    /// Create a new scan service.
    #[must_use]
    pub const fn new(client: &'a H) -> Self {
        Self { client }
    }

    /// List a user's repositories, treating an empty list as an error.
    pub async fn repositories(&self, username: &str) -> Result<Vec<Repository>> {
        let repos = self
            .client
            .list_repositories(username)
            .await
            .with_context(|| format!("Failed to list repositories for {username}"))?;

        if repos.is_empty() {
            return Err(ScanError::NoRepositories(username.to_string()).into());
        }
        tracing::info!(username, count = repos.len(), "listed repositories");
        Ok(repos)
    }

    /// Fetch commits, then events, and compare them.
    pub async fn scan(&self, owner: &str, repo: &str) -> Result<ScanReport> {
        let commits = self
            .client
            .list_commits(owner, repo)
            .await
            .with_context(|| format!("Failed to list commits for {owner}/{repo}"))?;

        let events = self
            .client
            .list_events(owner, repo)
            .await
            .with_context(|| format!("Failed to list events for {owner}/{repo}"))?;

        let summary = summarize(&commits, &events);
        tracing::info!(
            owner,
            repo,
            commits = commits.len(),
            events = events.len(),
            push_events = summary.push_events,
            deleted = summary.deleted.len(),
            "compared push events against history"
        );

        Ok(ScanReport {
            owner: owner.to_string(),
            repository: repo.to_string(),
            commits_checked: commits.len(),
            events_checked: events.len(),
            push_events: summary.push_events,
            pushed_commits: summary.pushed_commits,
            deleted: summary.deleted,
        })
    }

    /// Ask for whatever `request` leaves open, then scan the chosen repository.
    ///
    /// No commit or event request is made unless a repository was chosen.
    pub async fn run<R: BufRead, W: Write>(
        &self,
        prompt: &mut Prompt<R, W>,
        request: ScanRequest<'_>,
    ) -> Result<ScanReport> {
        let username = match request.username {
            Some(name) => name.trim().to_string(),
            None => prompt.ask("Enter the GitHub username: ")?,
        };
        if username.is_empty() {
            return Err(ScanError::EmptyUsername.into());
        }

        let repository = if let Some(name) = request.repository {
            let name = name.trim();
            if name.is_empty() {
                return Err(ScanError::EmptyRepository.into());
            }
            name.to_string()
        } else {
            let repos = self.repositories(&username).await?;

            prompt.say("Repositories found:")?;
            for (i, repo) in repos.iter().enumerate() {
                prompt.say(&output::menu_entry(i + 1, &repo.name))?;
            }

            let answer = prompt.ask("Choose a repository (enter the number): ")?;
            let index = parse_selection(&answer, repos.len())?;
            repos[index].name.clone()
        };

        self.scan(&username, &repository).await
    }
}

/// Turn a 1-based menu answer into a 0-based index.
///
/// # Errors
/// Returns [`ScanError::InvalidSelection`] unless `input` is a plain decimal
/// number in `1..=count`. Signs are not accepted.
pub fn parse_selection(input: &str, count: usize) -> Result<usize, ScanError> {
    let digits = input.trim();
    Some(digits)
        .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|d| d.parse::<usize>().ok())
        .filter(|n| (1..=count).contains(n))
        .map(|n| n - 1)
        .ok_or_else(|| ScanError::InvalidSelection {
            input: input.to_string(),
            count,
        })
}

//! Mock implementation of `GitHubApi` for testing services.

use std::collections::HashMap;
use std::sync::Mutex;

use pushlog_github::{Commit, Error, Event, GitHubApi, Repository, Result};

/// One recorded API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Repositories(String),
    Commits(String, String),
    Events(String, String),
}

/// In-memory GitHub keyed by owner and `owner/repo`.
#[derive(Default)]
pub struct MockGitHub {
    repositories: HashMap<String, Vec<Repository>>,
    commits: HashMap<String, Vec<Commit>>,
    events: HashMap<String, Vec<Event>>,
    failing: bool,
    calls: Mutex<Vec<Call>>,
}

impl MockGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repositories(mut self, owner: &str, names: &[&str]) -> Self {
        let repos = names
            .iter()
            .map(|name| Repository {
                name: (*name).to_string(),
            })
            .collect();
        self.repositories.insert(owner.to_string(), repos);
        self
    }

    pub fn with_commits(mut self, full_name: &str, shas: &[&str]) -> Self {
        let commits = shas.iter().copied().map(Commit::new).collect();
        self.commits.insert(full_name.to_string(), commits);
        self
    }

    pub fn with_events(mut self, full_name: &str, events: Vec<Event>) -> Self {
        self.events.insert(full_name.to_string(), events);
        self
    }

    /// Make every call fail with a server error.
    pub const fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    #[allow(clippy::unwrap_used)]
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    #[allow(clippy::unwrap_used)]
    fn record(&self, call: Call) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing {
            return Err(Error::ApiError {
                status: 500,
                message: "mock failure".into(),
            });
        }
        Ok(())
    }
}

impl GitHubApi for MockGitHub {
    async fn list_repositories(&self, username: &str) -> Result<Vec<Repository>> {
        self.record(Call::Repositories(username.to_string()))?;
        self.repositories
            .get(username)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("/users/{username}/repos")))
    }

    async fn list_commits(&self, owner: &str, repo: &str) -> Result<Vec<Commit>> {
        self.record(Call::Commits(owner.to_string(), repo.to_string()))?;
        Ok(self
            .commits
            .get(&format!("{owner}/{repo}"))
            .cloned()
            .unwrap_or_default())
    }

    async fn list_events(&self, owner: &str, repo: &str) -> Result<Vec<Event>> {
        self.record(Call::Events(owner.to_string(), repo.to_string()))?;
        Ok(self
            .events
            .get(&format!("{owner}/{repo}"))
            .cloned()
            .unwrap_or_default())
    }
}

//! Deleted-commit detection.
//!
//! A commit is flagged when its SHA shows up in a `PushEvent` payload but not
//! in the repository's current commit list. This is a heuristic: the same
//! signal is produced by force-push rewrites, pushes to branches other than
//! the default branch, and the commits endpoint only returning its first page.

use std::collections::HashSet;

use pushlog_github::{Commit, Event};

/// Counts gathered while scanning an event feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectionSummary {
    /// Number of push events seen.
    pub push_events: usize,
    /// Number of commits carried by those push events, duplicates included.
    pub pushed_commits: usize,
    /// Pushed SHAs missing from the commit list, in encounter order.
    pub deleted: Vec<String>,
}

/// Return the SHAs pushed in `events` that are absent from `commits`.
///
/// Events are scanned in order, and each push event's commits in order.
/// A SHA pushed more than once is reported once per push.
#[must_use]
pub fn find_deleted_commits(commits: &[Commit], events: &[Event]) -> Vec<String> {
    summarize(commits, events).deleted
}

/// Like [`find_deleted_commits`], also counting push events and pushed commits.
#[must_use]
pub fn summarize(commits: &[Commit], events: &[Event]) -> DetectionSummary {
    let current: HashSet<&str> = commits.iter().map(|c| c.sha.as_str()).collect();

    let mut summary = DetectionSummary::default();
    for event in events.iter().filter(|e| e.is_push()) {
        summary.push_events += 1;
        for commit in &event.payload.commits {
            summary.pushed_commits += 1;
            if !current.contains(commit.sha.as_str()) {
                summary.deleted.push(commit.sha.clone());
            }
        }
    }
    summary
}

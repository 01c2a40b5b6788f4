//! GitHub API types.
//!
//! Decoding is lenient: missing or `null` fields fall back to their zero
//! value and unknown fields are ignored, so partial responses still decode.

use serde::{Deserialize, Deserializer, Serialize};

/// Decode a field, mapping `null` to `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A repository owned by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    /// Repository name, without the owner prefix.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// A commit reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Commit {
    /// Full commit SHA.
    #[serde(deserialize_with = "null_as_default")]
    pub sha: String,
}

impl Commit {
    /// Create a commit reference from a SHA.
    #[must_use]
    pub fn new(sha: impl Into<String>) -> Self {
        Self { sha: sha.into() }
    }
}

/// An entry from a repository's public event feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    /// Event type, e.g. `PushEvent` or `IssuesEvent`.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,

    /// Event payload. Only the pushed commits are kept.
    #[serde(deserialize_with = "null_as_default")]
    pub payload: EventPayload,
}

impl Event {
    /// Type name GitHub uses for push events.
    pub const PUSH_EVENT: &'static str = "PushEvent";

    /// Create a push event carrying the given SHAs.
    #[must_use]
    pub fn push<I, S>(shas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: Self::PUSH_EVENT.to_string(),
            payload: EventPayload {
                commits: shas.into_iter().map(Commit::new).collect(),
            },
        }
    }

    /// Whether this is a push event. The comparison is exact and case-sensitive.
    #[must_use]
    pub fn is_push(&self) -> bool {
        self.kind == Self::PUSH_EVENT
    }
}

/// Payload of an [`Event`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventPayload {
    /// Commits carried by a push event, in push order.
    #[serde(deserialize_with = "null_as_default")]
    pub commits: Vec<Commit>,
}

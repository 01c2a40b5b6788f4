//! Error types for pushlog-github.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during GitHub API operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The server rejected the token.
    #[error("GitHub authentication failed - the token was rejected or has expired")]
    AuthenticationFailed,

    /// Token not found or empty.
    #[error("no GitHub token found - set {0} in the environment or in a .env file")]
    NoToken(String),

    /// API rate limit exceeded.
    #[error("GitHub API rate limit exceeded - wait and try again")]
    RateLimited,

    /// User or repository does not exist, or the token cannot see it.
    #[error("not found on GitHub: {0}")]
    NotFound(String),

    /// Any other non-success status.
    #[error("GitHub API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// The configured API URL cannot be used as a base for requests.
    #[error("invalid GitHub API URL: {0}")]
    InvalidBaseUrl(String),

    /// Network error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("failed to parse GitHub response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    /// Whether the request never produced an HTTP response.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

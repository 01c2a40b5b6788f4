//! GitHub API client.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;

use crate::auth::Auth;
use crate::error::{Error, Result};
use crate::traits::GitHubApi;
use crate::types::{Commit, Event, Repository};

/// Error body returned by the GitHub API on failure.
#[derive(serde::Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// GitHub API client.
pub struct GitHubClient {
    client: Client,
    base_url: Url,
    /// Token stored as `SecretString` for automatic zeroization on drop.
    token: SecretString,
}

impl GitHubClient {
    /// Default GitHub API URL.
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com";

    /// Create a new GitHub client.
    ///
    /// # Errors
    /// Returns error if authentication fails.
    pub fn new(auth: &Auth) -> Result<Self> {
        Self::with_base_url(auth, Self::DEFAULT_API_URL)
    }

    /// Create a new GitHub client with a custom API URL (for GitHub Enterprise).
    ///
    /// # Errors
    /// Returns error if authentication fails or the URL cannot serve as a base.
    pub fn with_base_url(auth: &Auth, base_url: &str) -> Result<Self> {
        let token = auth.resolve()?;

        let base_url = Url::parse(base_url)
            .map_err(|e| Error::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(base_url.to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("pushlog"));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// The API root requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL from path segments, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET an endpoint and decode its body as a JSON array of `T`.
    async fn get_list<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<Vec<T>> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .header(
                AUTHORIZATION,
                format!("token {}", self.token.expose_secret()),
            )
            .send()
            .await
            .inspect_err(|e| tracing::warn!(%url, error = %e, "request failed"))?;

        let items: Vec<T> = self.handle_response(response).await?;
        tracing::debug!(%url, count = items.len(), "decoded response");
        Ok(items)
    }

    /// Handle API response.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let path = response.url().path().to_string();

        if status.is_success() {
            let bytes = response.bytes().await?;
            return serde_json::from_slice(&bytes).map_err(|e| {
                tracing::warn!(%path, error = %e, "response body is not the expected JSON");
                Error::Parse(e)
            });
        }

        let status_code = status.as_u16();
        tracing::debug!(%path, status = status_code, "non-success status");

        match status_code {
            401 => Err(Error::AuthenticationFailed),
            403 if response
                .headers()
                .get("x-ratelimit-remaining")
                .is_some_and(|v| v == "0") =>
            {
                Err(Error::RateLimited)
            }
            404 => Err(Error::NotFound(path)),
            _ => {
                let text = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiErrorBody>(&text)
                    .map_or(text, |body| body.message);
                Err(Error::ApiError {
                    status: status_code,
                    message,
                })
            }
        }
    }

    /// List repositories owned by a user.
    ///
    /// # Errors
    /// Returns error if the request fails, the status is not a success, or
    /// the body does not decode.
    pub async fn list_repositories(&self, username: &str) -> Result<Vec<Repository>> {
        self.get_list(&["users", username, "repos"]).await
    }

    /// List commits on a repository's default branch.
    ///
    /// # Errors
    /// Returns error if the request fails, the status is not a success, or
    /// the body does not decode.
    pub async fn list_commits(&self, owner: &str, repo: &str) -> Result<Vec<Commit>> {
        self.get_list(&["repos", owner, repo, "commits"]).await
    }

    /// List public events for a repository.
    ///
    /// # Errors
    /// Returns error if the request fails, the status is not a success, or
    /// the body does not decode.
    pub async fn list_events(&self, owner: &str, repo: &str) -> Result<Vec<Event>> {
        self.get_list(&["repos", owner, repo, "events"]).await
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"[redacted]")
            .finish_non_exhaustive()
    }
}

// === Trait Implementation ===

impl GitHubApi for GitHubClient {
    async fn list_repositories(&self, username: &str) -> Result<Vec<Repository>> {
        self.list_repositories(username).await
    }

    async fn list_commits(&self, owner: &str, repo: &str) -> Result<Vec<Commit>> {
        self.list_commits(owner, repo).await
    }

    async fn list_events(&self, owner: &str, repo: &str) -> Result<Vec<Event>> {
        self.list_events(owner, repo).await
    }
}

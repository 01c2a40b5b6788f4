//! Effective settings after merging flags, environment and config file.

use pushlog_core::Config;
use pushlog_github::GitHubClient;

use crate::commands::ScanArgs;

/// Environment variable that overrides the configured API root.
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Settings the GitHub client is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub token_env: String,
}

impl Settings {
    /// Merge sources: command-line flag, then environment, then config file, then default.
    ///
    /// Blank values are treated as unset.
    pub fn resolve<F>(args: &ScanArgs, config: &Config, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = non_blank(args.api_url.clone())
            .or_else(|| non_blank(lookup(API_URL_ENV)))
            .or_else(|| non_blank(config.github.api_url.clone()))
            .unwrap_or_else(|| GitHubClient::DEFAULT_API_URL.to_string());

        let token_env = non_blank(args.token_env.clone())
            .or_else(|| non_blank(Some(config.github.token_env.clone())))
            .unwrap_or_else(|| pushlog_github::DEFAULT_TOKEN_ENV.to_string());

        Self { api_url, token_env }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

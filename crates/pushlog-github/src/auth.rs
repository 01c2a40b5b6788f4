//! Authentication handling for GitHub API.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{Error, Result};

/// Environment variable read by [`Auth::default`].
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Authentication method for GitHub API.
#[derive(Debug, Clone)]
pub enum Auth {
    /// Use token from the named environment variable.
    EnvVar(String),

    /// Use a specific token.
    Token(SecretString),
}

impl Auth {
    /// Read the token from the named environment variable.
    #[must_use]
    pub fn from_env(var: impl Into<String>) -> Self {
        Self::EnvVar(var.into())
    }

    /// Resolve the authentication to a token.
    ///
    /// # Errors
    /// Returns [`Error::NoToken`] if no usable token is available.
    pub fn resolve(&self) -> Result<SecretString> {
        self.resolve_with(|var| std::env::var(var).ok())
    }

    /// Resolve using `lookup` in place of the process environment.
    ///
    /// A value that is missing or contains only whitespace counts as no token.
    ///
    /// # Errors
    /// Returns [`Error::NoToken`] if no usable token is available.
    pub fn resolve_with<F>(&self, lookup: F) -> Result<SecretString>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match self {
            Self::EnvVar(var) => {
                let value = lookup(var).ok_or_else(|| Error::NoToken(var.clone()))?;
                let token = value.trim();
                if token.is_empty() {
                    return Err(Error::NoToken(var.clone()));
                }
                Ok(SecretString::from(token))
            }
            Self::Token(t) => {
                if t.expose_secret().trim().is_empty() {
                    return Err(Error::NoToken("token".into()));
                }
                Ok(t.clone())
            }
        }
    }
}

impl Default for Auth {
    fn default() -> Self {
        Self::from_env(DEFAULT_TOKEN_ENV)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_token_auth() {
        let auth = Auth::Token(SecretString::from("test_token"));
        assert_eq!(auth.resolve().unwrap().expose_secret(), "test_token");
    }

    #[test]
    fn test_blank_token_rejected() {
        let auth = Auth::Token(SecretString::from("  "));
        assert!(matches!(auth.resolve(), Err(Error::NoToken(_))));
    }

    #[test]
    fn test_default_reads_github_token() {
        assert!(matches!(Auth::default(), Auth::EnvVar(ref v) if v == "GITHUB_TOKEN"));
    }

    #[test]
    fn test_env_var_missing() {
        let err = Auth::from_env("MY_TOKEN").resolve_with(|_| None).unwrap_err();
        assert!(matches!(err, Error::NoToken(ref v) if v == "MY_TOKEN"));
    }

    #[test]
    fn test_env_var_looked_up_by_name() {
        let token = Auth::from_env("MY_TOKEN")
            .resolve_with(|var| (var == "MY_TOKEN").then(|| "  ghp_abc\n".to_string()))
            .unwrap();
        assert_eq!(token.expose_secret(), "ghp_abc");
    }

    #[test]
    fn test_env_var_empty() {
        let result = Auth::from_env("MY_TOKEN").resolve_with(|_| Some(String::new()));
        assert!(matches!(result, Err(Error::NoToken(_))));
    }
}

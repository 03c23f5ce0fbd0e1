//! Credential resolution and client configuration.

use crate::WhoopError;
use crate::endpoints;
use secrecy::SecretString;

/// WHOOP account credentials.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    /// Resolve credentials from explicit arguments, falling back to the
    /// `WHOOP_USERNAME` / `WHOOP_PASSWORD` environment variables.
    pub fn resolve(
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self, WhoopError> {
        Self::resolve_with(username, password, |k| std::env::var(k).ok())
    }

    /// Testable helper that reads environment values through the provided
    /// function, so tests never mutate the process environment.
    pub fn resolve_with<F>(
        username: Option<String>,
        password: Option<String>,
        mut get: F,
    ) -> Result<Self, WhoopError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let username = username
            .filter(|u| !u.is_empty())
            .or_else(|| get("WHOOP_USERNAME"))
            .ok_or_else(|| missing("WHOOP_USERNAME"))?;
        let password = password
            .filter(|p| !p.is_empty())
            .or_else(|| get("WHOOP_PASSWORD"))
            .ok_or_else(|| missing("WHOOP_PASSWORD"))?;
        Ok(Self {
            username,
            password: SecretString::new(password.into()),
        })
    }
}

fn missing(var: &str) -> WhoopError {
    WhoopError::Config(format!(
        "WHOOP credentials not provided: pass them explicitly or set {var}"
    ))
}

/// Client configuration. Base URLs default to the vendor hosts and are
/// overridable for tests.
#[derive(Clone, Debug)]
pub struct Config {
    pub credentials: Credentials,
    pub auth_base_url: String,
    pub api_base_url: String,
}

impl Config {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            auth_base_url: endpoints::DEFAULT_AUTH_BASE.to_string(),
            api_base_url: endpoints::DEFAULT_API_BASE.to_string(),
        }
    }
}

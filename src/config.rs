use std::time::Duration;

use octocrab::OctocrabBuilder;

use crate::client::GithubClient;

pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Process-wide settings, resolved once at startup.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub token: Option<String>,
    /// Base URL of the GitHub REST API. `None` means api.github.com.
    pub api_url: Option<String>,
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn build_client(&self) -> anyhow::Result<GithubClient> {
        let mut builder = OctocrabBuilder::new();

        if let Some(ref token) = self.token {
            builder = builder.personal_token(token.clone());
        }
        if let Some(ref url) = self.api_url {
            builder = builder
                .base_uri(url.as_str())
                .map_err(|e| anyhow::anyhow!("Invalid GitHub API URL {}: {}", url, e))?;
        }

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        builder = builder
            .set_connect_timeout(Some(std::cmp::min(timeout, Duration::from_secs(10))))
            .set_read_timeout(Some(timeout))
            .set_write_timeout(Some(timeout));

        let github = builder
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create GitHub client: {}", e))?;
        Ok(GithubClient::new(github))
    }
}

/// Resolve the token: explicit value first, then the named environment
/// variable (default `GITHUB_TOKEN`). Empty strings count as unset.
pub fn resolve_token(
    explicit: Option<String>,
    token_env: Option<&str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    if let Some(t) = explicit.filter(|t| !t.is_empty()) {
        return Some(t);
    }
    let env_name = token_env.unwrap_or(DEFAULT_TOKEN_ENV);
    match lookup(env_name) {
        Some(t) if !t.is_empty() => {
            tracing::info!(env = env_name, "Read GitHub token from environment variable");
            Some(t)
        }
        _ => None,
    }
}

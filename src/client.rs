use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::GithubToolsError;

/// Authenticated GitHub REST client shared read-only by every operation.
#[derive(Clone)]
pub struct GithubClient {
    github: Arc<octocrab::Octocrab>,
}

impl GithubClient {
    pub fn new(github: octocrab::Octocrab) -> Self {
        Self {
            github: Arc::new(github),
        }
    }

    pub async fn get<P: Serialize>(
        &self,
        route: &str,
        params: Option<&P>,
    ) -> Result<Value, GithubToolsError> {
        tracing::debug!(route, "GET");
        self.github.get(route, params).await.map_err(remote_failure)
    }

    pub async fn put(&self, route: &str, body: &Value) -> Result<Value, GithubToolsError> {
        tracing::debug!(route, "PUT");
        self.github.put(route, Some(body)).await.map_err(remote_failure)
    }

    pub async fn post(&self, route: &str, body: &Value) -> Result<Value, GithubToolsError> {
        tracing::debug!(route, "POST");
        self.github.post(route, Some(body)).await.map_err(remote_failure)
    }

    pub async fn delete(&self, route: &str, body: &Value) -> Result<Value, GithubToolsError> {
        tracing::debug!(route, "DELETE");
        self.github
            .delete(route, Some(body))
            .await
            .map_err(remote_failure)
    }
}

fn remote_failure(e: octocrab::Error) -> GithubToolsError {
    let err = GithubToolsError::GitHub(e);
    tracing::warn!(error = %err, "GitHub request failed");
    err
}

/// Validate that a GitHub owner/repo name doesn't contain characters that
/// could be used for URL injection in API routes.
pub fn sanitize_github_name(name: &str, field: &str) -> Result<(), GithubToolsError> {
    if name.is_empty() {
        return Err(GithubToolsError::InvalidParam(format!(
            "{} must not be empty",
            field
        )));
    }
    for ch in ['/', '?', '#', '%', '\0', ' ', '\n', '\t'] {
        if name.contains(ch) {
            return Err(GithubToolsError::InvalidParam(format!(
                "{} contains invalid character '{}'",
                field, ch
            )));
        }
    }
    Ok(())
}

/// Validate a branch name or file path. Other characters are made safe by
/// [`encode_segments`]; empty segments and `..` would change the route.
pub fn sanitize_url_value(value: &str, field: &str) -> Result<(), GithubToolsError> {
    if value.is_empty() {
        return Err(GithubToolsError::InvalidParam(format!(
            "{} must not be empty",
            field
        )));
    }
    if value.split('/').any(|seg| seg.is_empty() || seg == "..") {
        return Err(GithubToolsError::InvalidParam(format!(
            "{} contains an empty or '..' path segment",
            field
        )));
    }
    Ok(())
}

/// Percent-encode each segment of a slash-separated value, keeping the slashes.
pub fn encode_segments(value: &str) -> String {
    value
        .split('/')
        .map(|seg| urlencoding::encode(seg).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// `/repos/{owner}/{repo}` after validating both names.
pub fn repo_route(owner: &str, repo: &str) -> Result<String, GithubToolsError> {
    sanitize_github_name(owner, "owner")?;
    sanitize_github_name(repo, "repo")?;
    Ok(format!("/repos/{}/{}", owner, repo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_github_name_valid() {
        assert!(sanitize_github_name("my-org", "owner").is_ok());
        assert!(sanitize_github_name("user_name", "owner").is_ok());
        assert!(sanitize_github_name("repo.name", "repo").is_ok());
    }

    #[test]
    fn test_sanitize_github_name_rejects() {
        assert!(sanitize_github_name("", "owner").is_err());
        assert!(sanitize_github_name("owner/repo", "owner").is_err());
        assert!(sanitize_github_name("owner?evil=1", "owner").is_err());
        assert!(sanitize_github_name("my repo", "repo").is_err());
    }

    #[test]
    fn test_sanitize_url_value_allows_slashes() {
        assert!(sanitize_url_value("feature/my-branch", "branch").is_ok());
        assert!(sanitize_url_value("src/lib/utils.rs", "path").is_ok());
        assert!(sanitize_url_value("docs/My File.md", "path").is_ok());
        assert!(sanitize_url_value("notes#1.md", "path").is_ok());
        assert!(sanitize_url_value("what?.md", "path").is_ok());
        assert!(sanitize_url_value("tab\there.txt", "path").is_ok());
    }

    #[test]
    fn test_sanitize_url_value_rejects() {
        assert!(sanitize_url_value("", "branch").is_err());
        assert!(sanitize_url_value("../secrets", "path").is_err());
        assert!(sanitize_url_value("src//main.rs", "path").is_err());
        assert!(sanitize_url_value("/abs", "path").is_err());
    }

    #[test]
    fn test_encode_segments() {
        assert_eq!(encode_segments("src/main.rs"), "src/main.rs");
        assert_eq!(encode_segments("docs/My File.md"), "docs/My%20File.md");
        assert_eq!(encode_segments("feature/a&b"), "feature/a%26b");
        assert_eq!(encode_segments("notes#1.md"), "notes%231.md");
        assert_eq!(encode_segments("what?.md"), "what%3F.md");
        assert_eq!(encode_segments("docs/café.md"), "docs/caf%C3%A9.md");
    }

    #[test]
    fn test_repo_route() {
        assert_eq!(repo_route("o", "r").unwrap(), "/repos/o/r");
        assert!(matches!(
            repo_route("o", "r/../x"),
            Err(GithubToolsError::InvalidParam(_))
        ));
    }
}

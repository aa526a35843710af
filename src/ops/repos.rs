use rmcp::schemars;
use serde::Deserialize;
use serde_json::Value;

use crate::client::{repo_route, GithubClient};
use crate::error::GithubToolsError;

/// GitHub caps page size at 100.
const MAX_PER_PAGE: &str = "100";

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RepoParams {
    #[schemars(description = "Repository owner (user or org)")]
    pub owner: String,

    #[schemars(description = "Repository name")]
    pub repo: String,
}

/// Repositories the authenticated user owns or can access, first 100.
pub async fn list_repos(client: &GithubClient) -> Result<Value, GithubToolsError> {
    client
        .get("/user/repos", Some(&[("per_page", MAX_PER_PAGE)]))
        .await
}

pub async fn get_repo(client: &GithubClient, params: &RepoParams) -> Result<Value, GithubToolsError> {
    let route = repo_route(&params.owner, &params.repo)?;
    client.get(&route, None::<&()>).await
}

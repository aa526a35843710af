use rmcp::schemars;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::client::{encode_segments, repo_route, sanitize_url_value, GithubClient};
use crate::error::GithubToolsError;

use super::repos::{get_repo, RepoParams};
use super::str_field;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BranchParams {
    #[schemars(description = "Repository owner (user or org)")]
    pub owner: String,

    #[schemars(description = "Repository name")]
    pub repo: String,

    #[schemars(description = "Branch name")]
    pub branch: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateBranchParams {
    #[schemars(description = "Repository owner (user or org)")]
    pub owner: String,

    #[schemars(description = "Repository name")]
    pub repo: String,

    #[schemars(description = "Name of the branch to create")]
    pub branch: String,

    #[schemars(description = "Branch to start from (default: the repository's default branch)")]
    #[serde(default)]
    pub from_branch: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CompareParams {
    #[schemars(description = "Repository owner (user or org)")]
    pub owner: String,

    #[schemars(description = "Repository name")]
    pub repo: String,

    #[schemars(description = "Base branch, tag, or SHA")]
    pub base: String,

    #[schemars(description = "Head branch, tag, or SHA")]
    pub head: String,
}

#[derive(Debug, Serialize)]
pub struct BranchComparison {
    pub ahead_by: u64,
    pub behind_by: u64,
    pub files: Value,
}

pub async fn list_branches(
    client: &GithubClient,
    params: &RepoParams,
) -> Result<Value, GithubToolsError> {
    let route = format!("{}/branches", repo_route(&params.owner, &params.repo)?);
    client.get(&route, None::<&()>).await
}

pub async fn get_branch(
    client: &GithubClient,
    params: &BranchParams,
) -> Result<Value, GithubToolsError> {
    sanitize_url_value(&params.branch, "branch")?;
    let route = format!(
        "{}/branches/{}",
        repo_route(&params.owner, &params.repo)?,
        encode_segments(&params.branch)
    );
    client.get(&route, None::<&()>).await
}

/// Create `refs/heads/{branch}` at the tip of `from_branch`, falling back to
/// the repository's default branch.
pub async fn create_branch(
    client: &GithubClient,
    params: &CreateBranchParams,
) -> Result<Value, GithubToolsError> {
    let base = repo_route(&params.owner, &params.repo)?;
    sanitize_url_value(&params.branch, "branch")?;
    if let Some(ref from) = params.from_branch {
        sanitize_url_value(from, "from_branch")?;
    }

    let from_branch = match params.from_branch {
        Some(ref from) => from.clone(),
        None => {
            let repo = get_repo(
                client,
                &RepoParams {
                    owner: params.owner.clone(),
                    repo: params.repo.clone(),
                },
            )
            .await?;
            let default = str_field(&repo, "default_branch")?;
            tracing::debug!(default_branch = %default, "Resolved source branch");
            default
        }
    };

    let source_ref = client
        .get(
            &format!("{}/git/ref/heads/{}", base, encode_segments(&from_branch)),
            None::<&()>,
        )
        .await?;
    let sha = source_ref
        .pointer("/object/sha")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            GithubToolsError::UnexpectedResponse(format!(
                "ref heads/{} has no object sha",
                from_branch
            ))
        })?;

    tracing::info!(
        repo = %format!("{}/{}", params.owner, params.repo),
        branch = %params.branch,
        from = %from_branch,
        sha,
        "Creating branch"
    );

    client
        .post(
            &format!("{}/git/refs", base),
            &json!({
                "ref": format!("refs/heads/{}", params.branch),
                "sha": sha,
            }),
        )
        .await
}

pub async fn compare_branches(
    client: &GithubClient,
    params: &CompareParams,
) -> Result<BranchComparison, GithubToolsError> {
    sanitize_url_value(&params.base, "base")?;
    sanitize_url_value(&params.head, "head")?;
    let route = format!(
        "{}/compare/{}...{}",
        repo_route(&params.owner, &params.repo)?,
        encode_segments(&params.base),
        encode_segments(&params.head)
    );

    let response = client.get(&route, None::<&()>).await?;
    let count = |key: &str| {
        response.get(key).and_then(Value::as_u64).ok_or_else(|| {
            GithubToolsError::UnexpectedResponse(format!("missing field '{}'", key))
        })
    };

    Ok(BranchComparison {
        ahead_by: count("ahead_by")?,
        behind_by: count("behind_by")?,
        files: response.get("files").cloned().unwrap_or(Value::Null),
    })
}

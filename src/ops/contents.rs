use rmcp::schemars;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::client::{encode_segments, repo_route, sanitize_url_value, GithubClient};
use crate::encoding::{decode_text, encode_content};
use crate::error::GithubToolsError;

use super::user::current_login;
use super::{default_branch, str_field};

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CommitParams {
    #[schemars(description = "Commit message")]
    pub message: String,

    #[schemars(description = "New file content as plain text")]
    pub content: String,

    #[schemars(description = "File path within the repository")]
    pub path: String,

    #[schemars(description = "Branch to commit to")]
    pub branch: String,

    #[schemars(description = "Repository name, owned by the authenticated user")]
    pub repo: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateFileParams {
    #[schemars(description = "Repository owner (user or org)")]
    pub owner: String,

    #[schemars(description = "Repository name")]
    pub repo: String,

    #[schemars(description = "File path within the repository")]
    pub path: String,

    #[schemars(description = "New file content as plain text")]
    pub content: String,

    #[schemars(description = "Blob SHA of the file being replaced")]
    pub sha: String,

    #[schemars(description = "Branch to commit to (default: main)")]
    #[serde(default = "default_branch")]
    pub branch: String,

    #[schemars(description = "Commit message (default: \"Update file\")")]
    #[serde(default = "default_update_message")]
    pub message: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DeleteFileParams {
    #[schemars(description = "Repository owner (user or org)")]
    pub owner: String,

    #[schemars(description = "Repository name")]
    pub repo: String,

    #[schemars(description = "File path within the repository")]
    pub path: String,

    #[schemars(description = "Blob SHA of the file being deleted")]
    pub sha: String,

    #[schemars(description = "Branch to commit to (default: main)")]
    #[serde(default = "default_branch")]
    pub branch: String,

    #[schemars(description = "Commit message (default: \"Delete file\")")]
    #[serde(default = "default_delete_message")]
    pub message: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetFileParams {
    #[schemars(description = "Repository owner (user or org)")]
    pub owner: String,

    #[schemars(description = "Repository name")]
    pub repo: String,

    #[schemars(description = "File path within the repository")]
    pub path: String,

    #[schemars(description = "Branch, tag, or SHA to read from (default: main)")]
    #[serde(default = "default_branch")]
    pub branch: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListContentsParams {
    #[schemars(description = "Repository owner (user or org)")]
    pub owner: String,

    #[schemars(description = "Repository name")]
    pub repo: String,

    #[schemars(description = "Directory path (default: repository root)")]
    #[serde(default)]
    pub path: String,

    #[schemars(description = "Branch, tag, or SHA to read from (default: main)")]
    #[serde(default = "default_branch")]
    pub branch: String,
}

fn default_update_message() -> String {
    "Update file".to_string()
}

fn default_delete_message() -> String {
    "Delete file".to_string()
}

#[derive(Debug, Serialize)]
pub struct FileContent {
    pub name: String,
    pub path: String,
    pub sha: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ContentEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// `/repos/{owner}/{repo}/contents/{path}`; an empty path addresses the root.
fn contents_route(owner: &str, repo: &str, path: &str) -> Result<String, GithubToolsError> {
    let base = repo_route(owner, repo)?;
    if path.is_empty() {
        return Ok(format!("{}/contents", base));
    }
    sanitize_url_value(path, "path")?;
    Ok(format!("{}/contents/{}", base, encode_segments(path)))
}

/// Create a file on `branch` in one of the authenticated user's repositories.
pub async fn create_commit(
    client: &GithubClient,
    params: &CommitParams,
) -> Result<Value, GithubToolsError> {
    sanitize_url_value(&params.path, "path")?;
    sanitize_url_value(&params.branch, "branch")?;
    let owner = current_login(client).await?;
    let route = contents_route(&owner, &params.repo, &params.path)?;

    tracing::info!(owner = %owner, repo = %params.repo, path = %params.path, "Committing file");
    client
        .put(
            &route,
            &json!({
                "message": params.message,
                "content": encode_content(&params.content),
                "branch": params.branch,
            }),
        )
        .await
}

/// Replace a file. GitHub rejects the write with 409 when `sha` is stale.
pub async fn update_file(
    client: &GithubClient,
    params: &UpdateFileParams,
) -> Result<Value, GithubToolsError> {
    sanitize_url_value(&params.path, "path")?;
    sanitize_url_value(&params.branch, "branch")?;
    let route = contents_route(&params.owner, &params.repo, &params.path)?;

    client
        .put(
            &route,
            &json!({
                "message": params.message,
                "content": encode_content(&params.content),
                "sha": params.sha,
                "branch": params.branch,
            }),
        )
        .await
}

pub async fn delete_file(
    client: &GithubClient,
    params: &DeleteFileParams,
) -> Result<Value, GithubToolsError> {
    sanitize_url_value(&params.path, "path")?;
    sanitize_url_value(&params.branch, "branch")?;
    let route = contents_route(&params.owner, &params.repo, &params.path)?;

    client
        .delete(
            &route,
            &json!({
                "message": params.message,
                "sha": params.sha,
                "branch": params.branch,
            }),
        )
        .await
}

/// Read a single file and decode its content. Directories, symlinks and
/// submodules have no inline content and are rejected.
pub async fn get_file(
    client: &GithubClient,
    params: &GetFileParams,
) -> Result<FileContent, GithubToolsError> {
    sanitize_url_value(&params.path, "path")?;
    sanitize_url_value(&params.branch, "branch")?;
    let route = contents_route(&params.owner, &params.repo, &params.path)?;

    let response = client
        .get(&route, Some(&[("ref", params.branch.as_str())]))
        .await?;

    let encoded = response
        .get("content")
        .and_then(Value::as_str)
        .ok_or_else(|| GithubToolsError::NotAFile(params.path.clone()))?;

    // Files over 1 MB come back with `"encoding": "none"` and empty content.
    let encoding = response.get("encoding").and_then(Value::as_str);
    let size = response.get("size").and_then(Value::as_u64).unwrap_or(0);
    if encoding.is_some_and(|e| e != "base64") || (encoded.is_empty() && size > 0) {
        return Err(GithubToolsError::UnexpectedResponse(format!(
            "{} is too large for inline content ({} bytes)",
            params.path, size
        )));
    }

    Ok(FileContent {
        name: str_field(&response, "name")?,
        path: str_field(&response, "path")?,
        sha: str_field(&response, "sha")?,
        content: decode_text(encoded)?,
    })
}

pub async fn list_repo_contents(
    client: &GithubClient,
    params: &ListContentsParams,
) -> Result<Vec<ContentEntry>, GithubToolsError> {
    sanitize_url_value(&params.branch, "branch")?;
    let route = contents_route(&params.owner, &params.repo, &params.path)?;

    let response = client
        .get(&route, Some(&[("ref", params.branch.as_str())]))
        .await?;

    let Some(items) = response.as_array() else {
        let shown = if params.path.is_empty() { "/" } else { params.path.as_str() };
        return Err(GithubToolsError::NotADirectory(shown.to_string()));
    };

    items
        .iter()
        .map(|item| {
            Ok(ContentEntry {
                name: str_field(item, "name")?,
                path: str_field(item, "path")?,
                kind: str_field(item, "type")?,
            })
        })
        .collect()
}

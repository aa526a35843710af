use rmcp::schemars;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{encode_segments, repo_route, sanitize_url_value, GithubClient};
use crate::error::GithubToolsError;

use super::{default_branch, str_field};

const UNKNOWN_AUTHOR: &str = "Unknown Author";
const UNKNOWN_DATE: &str = "Unknown Date";

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LatestCommitParams {
    #[schemars(description = "Repository owner (user or org)")]
    pub owner: String,

    #[schemars(description = "Repository name")]
    pub repo: String,

    #[schemars(description = "Branch name (default: main)")]
    #[serde(default = "default_branch")]
    pub branch: String,
}

#[derive(Debug, Serialize)]
pub struct LatestCommit {
    pub sha: String,
    pub author: String,
    pub message: String,
    pub date: String,
}

impl LatestCommit {
    fn from_payload(payload: &Value) -> Result<Self, GithubToolsError> {
        let text_at = |pointer: &str| payload.pointer(pointer).and_then(Value::as_str);

        Ok(Self {
            sha: str_field(payload, "sha")?,
            author: text_at("/commit/author/name")
                .unwrap_or(UNKNOWN_AUTHOR)
                .to_string(),
            message: text_at("/commit/message")
                .ok_or_else(|| {
                    GithubToolsError::UnexpectedResponse("missing field 'commit.message'".into())
                })?
                .to_string(),
            date: text_at("/commit/author/date")
                .unwrap_or(UNKNOWN_DATE)
                .to_string(),
        })
    }
}

pub async fn get_latest_commit(
    client: &GithubClient,
    params: &LatestCommitParams,
) -> Result<LatestCommit, GithubToolsError> {
    sanitize_url_value(&params.branch, "branch")?;
    let route = format!(
        "{}/commits/{}",
        repo_route(&params.owner, &params.repo)?,
        encode_segments(&params.branch)
    );

    let payload = client.get(&route, None::<&()>).await?;
    LatestCommit::from_payload(&payload)
}

use rmcp::schemars;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::client::{repo_route, GithubClient};
use crate::error::GithubToolsError;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum PullState {
    All,
    #[default]
    Open,
    Closed,
}

impl PullState {
    pub fn as_str(self) -> &'static str {
        match self {
            PullState::All => "all",
            PullState::Open => "open",
            PullState::Closed => "closed",
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PullRequestsParams {
    #[schemars(description = "Repository owner (user or org)")]
    pub owner: String,

    #[schemars(description = "Repository name")]
    pub repo: String,

    #[schemars(description = "Filter by state: open, closed, or all (default: open)")]
    #[serde(default)]
    pub state: PullState,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreatePullRequestParams {
    #[schemars(description = "Repository owner (user or org)")]
    pub owner: String,

    #[schemars(description = "Repository name")]
    pub repo: String,

    #[schemars(description = "Branch containing the changes")]
    pub head: String,

    #[schemars(description = "Branch to merge into")]
    pub base: String,

    #[schemars(description = "Pull request title")]
    pub title: String,

    #[schemars(description = "Pull request description")]
    #[serde(default)]
    pub body: String,
}

pub async fn get_pull_requests(
    client: &GithubClient,
    params: &PullRequestsParams,
) -> Result<Value, GithubToolsError> {
    let route = format!("{}/pulls", repo_route(&params.owner, &params.repo)?);
    client
        .get(&route, Some(&[("state", params.state.as_str())]))
        .await
}

pub async fn create_pull_request(
    client: &GithubClient,
    params: &CreatePullRequestParams,
) -> Result<Value, GithubToolsError> {
    let route = format!("{}/pulls", repo_route(&params.owner, &params.repo)?);
    tracing::info!(head = %params.head, base = %params.base, "Opening pull request");
    client
        .post(
            &route,
            &json!({
                "head": params.head,
                "base": params.base,
                "title": params.title,
                "body": params.body,
            }),
        )
        .await
}

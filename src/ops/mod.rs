//! GitHub operations. Each function performs one REST call (branch creation
//! takes up to three) against the shared [`GithubClient`] and shapes the
//! response. Argument structs double as the tools' JSON schemas.

pub mod branches;
pub mod commits;
pub mod contents;
pub mod pulls;
pub mod repos;
pub mod user;

use serde_json::Value;

use crate::error::GithubToolsError;

pub use branches::{
    compare_branches, create_branch, get_branch, list_branches, BranchComparison,
    BranchParams, CompareParams, CreateBranchParams,
};
pub use commits::{get_latest_commit, LatestCommit, LatestCommitParams};
pub use contents::{
    create_commit, delete_file, get_file, list_repo_contents, update_file, CommitParams,
    ContentEntry, DeleteFileParams, FileContent, GetFileParams, ListContentsParams,
    UpdateFileParams,
};
pub use pulls::{
    create_pull_request, get_pull_requests, CreatePullRequestParams, PullRequestsParams,
    PullState,
};
pub use repos::{get_repo, list_repos, RepoParams};
pub use user::{get_user_info, list_following};

pub(crate) fn default_branch() -> String {
    "main".to_string()
}

/// Required string field of a GitHub payload.
pub(crate) fn str_field(value: &Value, key: &str) -> Result<String, GithubToolsError> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or_else(|| GithubToolsError::UnexpectedResponse(format!("missing field '{}'", key)))
}

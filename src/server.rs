use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{schemars, tool, tool_handler, tool_router, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::client::GithubClient;
use crate::error::GithubToolsError;
use crate::ops::{
    self, BranchParams, CommitParams, CompareParams, CreateBranchParams, CreatePullRequestParams,
    DeleteFileParams, GetFileParams, LatestCommitParams, ListContentsParams, PullRequestsParams,
    RepoParams, UpdateFileParams,
};

#[derive(Clone)]
pub struct GithubToolsServer {
    client: GithubClient,
    tool_router: ToolRouter<Self>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddParams {
    #[schemars(description = "First number")]
    pub a: f64,

    #[schemars(description = "Second number")]
    pub b: f64,
}

impl GithubToolsServer {
    pub fn new(client: GithubClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }
}

/// Turn an operation outcome into the tool response: one text element
/// holding the JSON result or `Error: <message>`. Operation failures never
/// escape as protocol errors; only malformed arguments do, inside rmcp.
fn envelope<T: Serialize>(
    tool: &str,
    result: Result<T, GithubToolsError>,
) -> Result<CallToolResult, ErrorData> {
    let rendered = result.and_then(|value| {
        serde_json::to_string_pretty(&value).map_err(GithubToolsError::Serialize)
    });
    match rendered {
        Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Err(e) => {
            tracing::warn!(tool, error = %e, "Tool call failed");
            Ok(CallToolResult::error(vec![Content::text(format!(
                "Error: {}",
                e
            ))]))
        }
    }
}

// -- MCP tool handlers (each calls exactly one ops function) --

#[tool_router]
impl GithubToolsServer {
    #[tool(
        name = "get-user-info",
        description = "Gets the user info for the current user",
        annotations(title = "Gets the user info for the current user", read_only_hint = true)
    )]
    async fn get_user_info(&self) -> Result<CallToolResult, ErrorData> {
        envelope("get-user-info", ops::get_user_info(&self.client).await)
    }

    #[tool(
        name = "list-repos",
        description = "Lists the repositories for the current user",
        annotations(title = "Lists the repositories for the current user", read_only_hint = true)
    )]
    async fn list_repos(&self) -> Result<CallToolResult, ErrorData> {
        envelope("list-repos", ops::list_repos(&self.client).await)
    }

    #[tool(
        name = "get-repo",
        description = "Gets a repository for the current user",
        annotations(title = "Gets a repository for the current user", read_only_hint = true)
    )]
    async fn get_repo(
        &self,
        Parameters(params): Parameters<RepoParams>,
    ) -> Result<CallToolResult, ErrorData> {
        tracing::debug!(owner = %params.owner, repo = %params.repo, "get-repo");
        envelope("get-repo", ops::get_repo(&self.client, &params).await)
    }

    #[tool(
        name = "list-branches",
        description = "Lists the branches for a repository",
        annotations(title = "Lists the branches for a repository", read_only_hint = true)
    )]
    async fn list_branches(
        &self,
        Parameters(params): Parameters<RepoParams>,
    ) -> Result<CallToolResult, ErrorData> {
        tracing::debug!(owner = %params.owner, repo = %params.repo, "list-branches");
        envelope("list-branches", ops::list_branches(&self.client, &params).await)
    }

    #[tool(
        name = "list-following",
        description = "Lists the GitHub users you are following",
        annotations(title = "Lists the GitHub users you are following", read_only_hint = true)
    )]
    async fn list_following(&self) -> Result<CallToolResult, ErrorData> {
        envelope("list-following", ops::list_following(&self.client).await)
    }

    #[tool(
        name = "add",
        description = "Adds two numbers together",
        annotations(title = "Adds two numbers together", read_only_hint = true)
    )]
    async fn add(
        &self,
        Parameters(params): Parameters<AddParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text(
            (params.a + params.b).to_string(),
        )]))
    }

    #[tool(
        name = "make-a-commit",
        description = "Commits a file to a repository owned by the current user",
        annotations(title = "Commits a change to a GitHub repository", destructive_hint = true)
    )]
    async fn make_a_commit(
        &self,
        Parameters(params): Parameters<CommitParams>,
    ) -> Result<CallToolResult, ErrorData> {
        tracing::debug!(
            repo = %params.repo,
            path = %params.path,
            branch = %params.branch,
            "make-a-commit"
        );
        envelope("make-a-commit", ops::create_commit(&self.client, &params).await)
    }

    #[tool(
        name = "create-branch",
        description = "Creates a new branch from from_branch, or from the repository's default branch",
        annotations(title = "Creates a new branch in a GitHub repository", destructive_hint = false)
    )]
    async fn create_branch(
        &self,
        Parameters(params): Parameters<CreateBranchParams>,
    ) -> Result<CallToolResult, ErrorData> {
        tracing::debug!(
            owner = %params.owner,
            repo = %params.repo,
            branch = %params.branch,
            "create-branch"
        );
        envelope("create-branch", ops::create_branch(&self.client, &params).await)
    }

    #[tool(
        name = "get-file",
        description = "Gets a file's decoded content and blob SHA",
        annotations(title = "Gets a file from a GitHub repository", read_only_hint = true)
    )]
    async fn get_file(
        &self,
        Parameters(params): Parameters<GetFileParams>,
    ) -> Result<CallToolResult, ErrorData> {
        tracing::debug!(
            owner = %params.owner,
            repo = %params.repo,
            path = %params.path,
            "get-file"
        );
        envelope("get-file", ops::get_file(&self.client, &params).await)
    }

    #[tool(
        name = "list-repo-contents",
        description = "Lists the entries of a directory in a repository",
        annotations(title = "Lists the contents of a GitHub repository", read_only_hint = true)
    )]
    async fn list_repo_contents(
        &self,
        Parameters(params): Parameters<ListContentsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        tracing::debug!(
            owner = %params.owner,
            repo = %params.repo,
            path = %params.path,
            "list-repo-contents"
        );
        envelope(
            "list-repo-contents",
            ops::list_repo_contents(&self.client, &params).await,
        )
    }

    #[tool(
        name = "compare-branches",
        description = "Compares two branches: commits ahead, commits behind, and changed files",
        annotations(title = "Compares two branches in a GitHub repository", read_only_hint = true)
    )]
    async fn compare_branches(
        &self,
        Parameters(params): Parameters<CompareParams>,
    ) -> Result<CallToolResult, ErrorData> {
        tracing::debug!(base = %params.base, head = %params.head, "compare-branches");
        envelope(
            "compare-branches",
            ops::compare_branches(&self.client, &params).await,
        )
    }

    #[tool(
        name = "delete-file",
        description = "Deletes a file; sha must be the file's current blob SHA",
        annotations(title = "Deletes a file from a GitHub repository", destructive_hint = true)
    )]
    async fn delete_file(
        &self,
        Parameters(params): Parameters<DeleteFileParams>,
    ) -> Result<CallToolResult, ErrorData> {
        tracing::debug!(
            owner = %params.owner,
            repo = %params.repo,
            path = %params.path,
            "delete-file"
        );
        envelope("delete-file", ops::delete_file(&self.client, &params).await)
    }

    #[tool(
        name = "update-file",
        description = "Replaces a file's content; sha must be the file's current blob SHA",
        annotations(title = "Updates a file in a GitHub repository", destructive_hint = true)
    )]
    async fn update_file(
        &self,
        Parameters(params): Parameters<UpdateFileParams>,
    ) -> Result<CallToolResult, ErrorData> {
        tracing::debug!(
            owner = %params.owner,
            repo = %params.repo,
            path = %params.path,
            "update-file"
        );
        envelope("update-file", ops::update_file(&self.client, &params).await)
    }

    #[tool(
        name = "get-branch",
        description = "Gets a branch including its tip commit and protection status",
        annotations(title = "Gets a branch from a GitHub repository", read_only_hint = true)
    )]
    async fn get_branch(
        &self,
        Parameters(params): Parameters<BranchParams>,
    ) -> Result<CallToolResult, ErrorData> {
        tracing::debug!(
            owner = %params.owner,
            repo = %params.repo,
            branch = %params.branch,
            "get-branch"
        );
        envelope("get-branch", ops::get_branch(&self.client, &params).await)
    }

    #[tool(
        name = "get-latest-commit",
        description = "Gets sha, author, message and date of a branch's latest commit",
        annotations(title = "Gets the latest commit from a GitHub repository", read_only_hint = true)
    )]
    async fn get_latest_commit(
        &self,
        Parameters(params): Parameters<LatestCommitParams>,
    ) -> Result<CallToolResult, ErrorData> {
        tracing::debug!(
            owner = %params.owner,
            repo = %params.repo,
            branch = %params.branch,
            "get-latest-commit"
        );
        envelope(
            "get-latest-commit",
            ops::get_latest_commit(&self.client, &params).await,
        )
    }

    #[tool(
        name = "get-pull-requests",
        description = "Gets the pull requests for a repository, filtered by state (default: open)",
        annotations(title = "Gets the pull requests for a GitHub repository", read_only_hint = true)
    )]
    async fn get_pull_requests(
        &self,
        Parameters(params): Parameters<PullRequestsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        tracing::debug!(
            owner = %params.owner,
            repo = %params.repo,
            state = params.state.as_str(),
            "get-pull-requests"
        );
        envelope(
            "get-pull-requests",
            ops::get_pull_requests(&self.client, &params).await,
        )
    }

    #[tool(
        name = "create-pull-request",
        description = "Opens a pull request from head into base",
        annotations(title = "Creates a pull request for a GitHub repository", destructive_hint = false)
    )]
    async fn create_pull_request(
        &self,
        Parameters(params): Parameters<CreatePullRequestParams>,
    ) -> Result<CallToolResult, ErrorData> {
        tracing::debug!(
            owner = %params.owner,
            repo = %params.repo,
            head = %params.head,
            base = %params.base,
            "create-pull-request"
        );
        envelope(
            "create-pull-request",
            ops::create_pull_request(&self.client, &params).await,
        )
    }
}

#[tool_handler]
impl ServerHandler for GithubToolsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-github-tools".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "GitHub repository tools. Read with get-user-info, list-repos, get-repo, \
                 list-branches, get-branch, get-file, list-repo-contents, get-latest-commit, \
                 compare-branches, get-pull-requests and list-following. Write with \
                 make-a-commit, create-branch, update-file, delete-file and \
                 create-pull-request; update-file and delete-file need the file's current \
                 sha, which get-file returns. Failed calls return text starting with 'Error:'."
                    .to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use mockito::Matcher;
    use serde::de::DeserializeOwned;
    use serde_json::{json, Value};

    const TOOL_NAMES: [&str; 17] = [
        "get-user-info",
        "list-repos",
        "get-repo",
        "list-branches",
        "list-following",
        "add",
        "make-a-commit",
        "create-branch",
        "get-file",
        "list-repo-contents",
        "compare-branches",
        "delete-file",
        "update-file",
        "get-branch",
        "get-latest-commit",
        "get-pull-requests",
        "create-pull-request",
    ];

    fn make_server(server: &mockito::ServerGuard) -> GithubToolsServer {
        let client = Config {
            token: Some("test-token".to_string()),
            api_url: Some(server.url()),
            timeout: None,
        }
        .build_client()
        .expect("client");
        GithubToolsServer::new(client)
    }

    fn args<T: DeserializeOwned>(value: Value) -> Parameters<T> {
        Parameters(serde_json::from_value(value).expect("valid arguments"))
    }

    /// The single text element of a tool response.
    fn sole_text(result: &CallToolResult) -> &str {
        assert_eq!(result.content.len(), 1, "envelope must hold exactly one element");
        result.content[0]
            .as_text()
            .map(|t| t.text.as_str())
            .expect("text content")
    }

    /// Respond 404 to every request, whatever the method or path.
    async fn fail_everything(server: &mut mockito::ServerGuard) {
        for method in ["GET", "PUT", "POST", "DELETE"] {
            server
                .mock(method, Matcher::Any)
                .match_query(Matcher::Any)
                .with_status(404)
                .with_header("content-type", "application/json")
                .with_body(r#"{"message":"Not Found"}"#)
                .create_async()
                .await;
        }
    }

    #[tokio::test]
    async fn test_router_registers_all_tools() {
        let tools = GithubToolsServer::tool_router().list_all();
        assert_eq!(tools.len(), TOOL_NAMES.len());
        for name in TOOL_NAMES {
            let tool = tools
                .iter()
                .find(|t| t.name == name)
                .unwrap_or_else(|| panic!("missing tool {}", name));
            let title = tool.annotations.as_ref().and_then(|a| a.title.as_deref());
            assert!(title.is_some_and(|t| !t.is_empty()), "{} has no title", name);
        }
    }

    #[tokio::test]
    async fn test_add() {
        let server = mockito::Server::new_async().await;
        let tools = make_server(&server);
        let result = tools.add(args(json!({"a": 2, "b": 3}))).await.unwrap();
        assert_eq!(sole_text(&result), "5");

        let result = tools.add(args(json!({"a": 1.5, "b": 1}))).await.unwrap();
        assert_eq!(sole_text(&result), "2.5");
    }

    #[tokio::test]
    async fn test_get_pull_requests_defaults_to_open() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/o/r/pulls")
            .match_query(Matcher::UrlEncoded("state".into(), "open".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"number": 1, "state": "open"}]"#)
            .create_async()
            .await;

        let tools = make_server(&server);
        let result = tools
            .get_pull_requests(args(json!({"owner": "o", "repo": "r"})))
            .await
            .unwrap();
        let parsed: Value = serde_json::from_str(sole_text(&result)).unwrap();
        assert_eq!(parsed[0]["number"], 1);
        assert_ne!(result.is_error, Some(true));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_file_conflict_is_surfaced() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("PUT", "/repos/o/r/contents/README.md")
            .with_status(409)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"message":"README.md does not match 0000000","documentation_url":"https://docs.github.com/rest/repos/contents"}"#,
            )
            .create_async()
            .await;

        let tools = make_server(&server);
        let result = tools
            .update_file(args(json!({
                "owner": "o", "repo": "r", "path": "README.md",
                "content": "new text", "sha": "0000000"
            })))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(sole_text(&result), "Error: README.md does not match 0000000");
    }

    #[tokio::test]
    async fn test_shape_mismatch_becomes_text() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/repos/o/r/contents/src")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"name":"lib.rs","path":"src/lib.rs","type":"file"}]"#)
            .create_async()
            .await;

        let tools = make_server(&server);
        let result = tools
            .get_file(args(json!({"owner": "o", "repo": "r", "path": "src"})))
            .await
            .unwrap();
        assert!(sole_text(&result).starts_with("Error: "));
    }

    #[tokio::test]
    async fn test_get_file_percent_encodes_reserved_characters() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/o/r/contents/notes%231.md")
            .match_query(Matcher::UrlEncoded("ref".into(), "main".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name":"notes#1.md","path":"notes#1.md","sha":"s","content":"aGk="}"#)
            .create_async()
            .await;

        let tools = make_server(&server);
        let result = tools
            .get_file(args(json!({"owner": "o", "repo": "r", "path": "notes#1.md"})))
            .await
            .expect("well-typed arguments always produce an envelope");
        let parsed: Value = serde_json::from_str(sole_text(&result)).unwrap();
        assert_eq!(parsed["content"], "hi");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_file_percent_encodes_spaces() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/o/r/contents/docs/My%20File.md")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name":"My File.md","path":"docs/My File.md","sha":"s","content":"aGk="}"#)
            .create_async()
            .await;

        let tools = make_server(&server);
        let result = tools
            .get_file(args(json!({"owner": "o", "repo": "r", "path": "docs/My File.md"})))
            .await
            .unwrap();
        assert!(!sole_text(&result).starts_with("Error:"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_branch_from_nested_branch_name() {
        let mut server = mockito::Server::new_async().await;
        let ref_mock = server
            .mock("GET", "/repos/o/r/git/ref/heads/feature/x")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ref":"refs/heads/feature/x","object":{"sha":"f00d"}}"#)
            .create_async()
            .await;
        let create_mock = server
            .mock("POST", "/repos/o/r/git/refs")
            .match_body(Matcher::Json(json!({"ref": "refs/heads/hotfix", "sha": "f00d"})))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ref":"refs/heads/hotfix"}"#)
            .create_async()
            .await;

        let tools = make_server(&server);
        let result = tools
            .create_branch(args(json!({
                "owner": "o", "repo": "r", "branch": "hotfix", "from_branch": "feature/x"
            })))
            .await
            .unwrap();
        assert!(!sole_text(&result).starts_with("Error:"));
        ref_mock.assert_async().await;
        create_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_rejected_values_still_return_envelope() {
        let server = mockito::Server::new_async().await;
        let tools = make_server(&server);

        let result = tools
            .get_repo(args(json!({"owner": "", "repo": "r"})))
            .await
            .expect("value problems are reported in the envelope");
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            sole_text(&result),
            "Error: Invalid parameter: owner must not be empty"
        );

        let result = tools
            .get_file(args(json!({"owner": "o", "repo": "r", "path": "../secrets"})))
            .await
            .unwrap();
        assert!(sole_text(&result).starts_with("Error: Invalid parameter"));
    }

    #[tokio::test]
    async fn test_every_tool_returns_single_text_element_on_failure() {
        let mut server = mockito::Server::new_async().await;
        fail_everything(&mut server).await;
        let tools = make_server(&server);

        let repo = json!({"owner": "o", "repo": "r"});
        let results = vec![
            tools.get_user_info().await,
            tools.list_repos().await,
            tools.get_repo(args(repo.clone())).await,
            tools.list_branches(args(repo.clone())).await,
            tools.list_following().await,
            tools
                .make_a_commit(args(json!({
                    "message": "m", "content": "c", "path": "a.txt", "branch": "main", "repo": "r"
                })))
                .await,
            tools
                .create_branch(args(json!({"owner": "o", "repo": "r", "branch": "b"})))
                .await,
            tools
                .get_file(args(json!({"owner": "o", "repo": "r", "path": "a.txt"})))
                .await,
            tools.list_repo_contents(args(repo.clone())).await,
            tools
                .compare_branches(args(json!({"owner": "o", "repo": "r", "base": "a", "head": "b"})))
                .await,
            tools
                .delete_file(args(json!({"owner": "o", "repo": "r", "path": "a.txt", "sha": "s"})))
                .await,
            tools
                .update_file(args(json!({
                    "owner": "o", "repo": "r", "path": "a.txt", "content": "c", "sha": "s"
                })))
                .await,
            tools
                .get_branch(args(json!({"owner": "o", "repo": "r", "branch": "main"})))
                .await,
            tools.get_latest_commit(args(repo.clone())).await,
            tools.get_pull_requests(args(repo.clone())).await,
            tools
                .create_pull_request(args(json!({
                    "owner": "o", "repo": "r", "head": "h", "base": "b", "title": "t"
                })))
                .await,
        ];

        assert_eq!(results.len(), TOOL_NAMES.len() - 1);
        for result in results {
            let result = result.expect("operation failures must not escape as protocol errors");
            assert_eq!(result.is_error, Some(true));
            assert_eq!(sole_text(&result), "Error: Not Found");
        }
    }

    #[tokio::test]
    async fn test_every_tool_returns_single_text_element_on_success() {
        let mut server = mockito::Server::new_async().await;
        let routes = [
            ("GET", "/user", r#"{"login":"me"}"#),
            ("GET", "/user/repos", "[]"),
            ("GET", "/user/following", "[]"),
            ("GET", "/repos/o/r", r#"{"default_branch":"main"}"#),
            ("GET", "/repos/o/r/branches", "[]"),
            ("GET", "/repos/o/r/branches/main", r#"{"name":"main"}"#),
            ("GET", "/repos/o/r/git/ref/heads/main", r#"{"object":{"sha":"s"}}"#),
            ("POST", "/repos/o/r/git/refs", r#"{"ref":"refs/heads/b"}"#),
            ("PUT", "/repos/me/r/contents/a.txt", r#"{"commit":{"sha":"c"}}"#),
            ("PUT", "/repos/o/r/contents/a.txt", r#"{"commit":{"sha":"c"}}"#),
            ("DELETE", "/repos/o/r/contents/a.txt", r#"{"commit":{"sha":"c"}}"#),
            (
                "GET",
                "/repos/o/r/contents/a.txt",
                r#"{"name":"a.txt","path":"a.txt","sha":"s","content":"aGk="}"#,
            ),
            (
                "GET",
                "/repos/o/r/contents",
                r#"[{"name":"a.txt","path":"a.txt","type":"file"}]"#,
            ),
            (
                "GET",
                "/repos/o/r/compare/a...b",
                r#"{"ahead_by":0,"behind_by":0,"files":[]}"#,
            ),
            ("GET", "/repos/o/r/commits/main", r#"{"sha":"s","commit":{"message":"m"}}"#),
            ("GET", "/repos/o/r/pulls", "[]"),
            ("POST", "/repos/o/r/pulls", r#"{"number":1}"#),
        ];
        for (method, path, body) in routes {
            server
                .mock(method, path)
                .match_query(Matcher::Any)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body)
                .create_async()
                .await;
        }
        let tools = make_server(&server);

        let repo = json!({"owner": "o", "repo": "r"});
        let results = vec![
            tools.get_user_info().await,
            tools.list_repos().await,
            tools.get_repo(args(repo.clone())).await,
            tools.list_branches(args(repo.clone())).await,
            tools.list_following().await,
            tools.add(args(json!({"a": 1, "b": 1}))).await,
            tools
                .make_a_commit(args(json!({
                    "message": "m", "content": "c", "path": "a.txt", "branch": "main", "repo": "r"
                })))
                .await,
            tools
                .create_branch(args(json!({"owner": "o", "repo": "r", "branch": "b"})))
                .await,
            tools
                .get_file(args(json!({"owner": "o", "repo": "r", "path": "a.txt"})))
                .await,
            tools.list_repo_contents(args(repo.clone())).await,
            tools
                .compare_branches(args(json!({"owner": "o", "repo": "r", "base": "a", "head": "b"})))
                .await,
            tools
                .delete_file(args(json!({"owner": "o", "repo": "r", "path": "a.txt", "sha": "s"})))
                .await,
            tools
                .update_file(args(json!({
                    "owner": "o", "repo": "r", "path": "a.txt", "content": "c", "sha": "s"
                })))
                .await,
            tools
                .get_branch(args(json!({"owner": "o", "repo": "r", "branch": "main"})))
                .await,
            tools.get_latest_commit(args(repo.clone())).await,
            tools.get_pull_requests(args(repo.clone())).await,
            tools
                .create_pull_request(args(json!({
                    "owner": "o", "repo": "r", "head": "h", "base": "b", "title": "t"
                })))
                .await,
        ];

        assert_eq!(results.len(), TOOL_NAMES.len());
        for result in results {
            let result = result.expect("tool call");
            assert_ne!(result.is_error, Some(true), "{:?}", result.content);
            assert!(!sole_text(&result).starts_with("Error:"));
        }
    }
}

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use mcp_github_tools::config::{self, Config};
use mcp_github_tools::server;
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::EnvFilter;

/// MCP server for GitHub: lets agents read and change repository files, branches, and pull requests
#[derive(Parser)]
#[command(name = "mcp-github-tools", version, about)]
struct Cli {
    /// GitHub personal access token.
    /// Can also be set via GITHUB_TOKEN environment variable.
    /// `.env` files are not read; export the variable in the launching shell.
    #[arg(long)]
    token: Option<String>,

    /// Read GitHub token from an environment variable.
    /// Default: GITHUB_TOKEN
    #[arg(long = "token-env")]
    token_env: Option<String>,

    /// GitHub API base URL, for GitHub Enterprise Server
    #[arg(long = "api-url")]
    api_url: Option<String>,

    /// HTTP read/write timeout in seconds
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // --token > --token-env > GITHUB_TOKEN
    let token = config::resolve_token(cli.token, cli.token_env.as_deref(), |name| {
        std::env::var(name).ok()
    });

    let config = Config {
        token,
        api_url: cli.api_url,
        timeout: Some(Duration::from_secs(cli.timeout)),
    };

    if !config.authenticated() {
        tracing::warn!(
            "No GitHub token provided; API rate limits will be very restrictive \
             and write tools will fail"
        );
    }

    let client = config.build_client()?;

    tracing::info!(
        authenticated = config.authenticated(),
        api_url = config.api_url.as_deref().unwrap_or("https://api.github.com"),
        timeout_secs = cli.timeout,
        "Starting mcp-github-tools server"
    );

    let service = server::GithubToolsServer::new(client);
    let running = service.serve(stdio()).await?;
    running.waiting().await?;

    Ok(())
}

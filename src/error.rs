#[derive(Debug, thiserror::Error)]
pub enum GithubToolsError {
    #[error("{}", remote_message(.0))]
    GitHub(#[from] octocrab::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParam(String),

    #[error("No content found at path: {0}")]
    NotAFile(String),

    #[error("Path is not a directory: {0}")]
    NotADirectory(String),

    #[error("Failed to decode file content: {0}")]
    Decode(String),

    #[error("Unexpected response from GitHub: {0}")]
    UnexpectedResponse(String),

    #[error("Failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The message GitHub attached to a failed request, or the transport error
/// when there was no API response to read one from.
fn remote_message(err: &octocrab::Error) -> String {
    match err {
        octocrab::Error::GitHub { source, .. } => source.message.clone(),
        other => other.to_string(),
    }
}

use serde_json::Value;

use crate::client::GithubClient;
use crate::error::GithubToolsError;

/// The authenticated user's full record.
pub async fn get_user_info(client: &GithubClient) -> Result<Value, GithubToolsError> {
    client.get("/user", None::<&()>).await
}

/// Accounts the authenticated user follows, as full records.
pub async fn list_following(client: &GithubClient) -> Result<Value, GithubToolsError> {
    let following = client.get("/user/following", None::<&()>).await?;

    let logins: Vec<&str> = following
        .as_array()
        .map(|users| {
            users
                .iter()
                .filter_map(|u| u.get("login").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default();
    tracing::debug!(?logins, "Users followed by the authenticated account");

    Ok(following)
}

/// Login of the authenticated user.
pub(crate) async fn current_login(client: &GithubClient) -> Result<String, GithubToolsError> {
    let user = get_user_info(client).await?;
    super::str_field(&user, "login")
}

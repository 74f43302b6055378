use serde_json::json;
use valq::query_value;

use super::fetch::graphql_data;
use super::queries::USER_INFO_QUERY;
use super::types::UserInfo;
use crate::github::client::Transport;
use crate::github::error::FetchError;

pub(crate) async fn query_viewer_login<T: Transport>(client: &T) -> anyhow::Result<String> {
    let payload = json!({ "query": "query { viewer { login } }" });
    let data = graphql_data(client.graphql(&payload).await?)?;
    let login = query_value!(data.viewer.login -> str)
        .ok_or_else(|| anyhow::anyhow!("viewer response missing login"))?;
    Ok(login.to_string())
}

/// Profile of `login`; `None` when no such user exists.
pub(crate) async fn fetch_user_info<T: Transport>(
    client: &T,
    login: &str,
) -> Result<Option<UserInfo>, FetchError> {
    let payload = json!({
        "query": USER_INFO_QUERY,
        "variables": { "login": login },
    });
    let data = graphql_data(client.graphql(&payload).await?)?;
    let Some(user) = query_value!(data.user) else {
        return Ok(None);
    };

    let (Some(id), Some(login), Some(url)) = (
        query_value!(user.id -> str),
        query_value!(user.login -> str),
        query_value!(user.url -> str),
    ) else {
        return Ok(None);
    };
    Ok(Some(UserInfo {
        id: id.to_string(),
        login: login.to_string(),
        name: query_value!(user.name -> str).map(str::to_string),
        url: url.to_string(),
    }))
}

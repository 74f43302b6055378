use serde_json::json;

use super::fetch::fetch_windowed;
use super::pages::GraphqlPages;
use super::queries::{QueryKind, variables};
use super::types::*;
use crate::github::client::Transport;
use crate::github::error::FetchError;

/// Commit comments written by `login` within `window`.
///
/// `date_field` defaults to `publishedAt`.
pub(crate) async fn fetch_commit_comments<T: Transport>(
    client: &T,
    login: &str,
    window: Window,
    date_field: Option<&str>,
) -> Result<Vec<Item>, FetchError> {
    fetch_user_comments(client, QueryKind::CommitComments, login, window, date_field).await
}

/// Issue and pull request comments written by `login` within `window`.
///
/// `date_field` defaults to `publishedAt`.
pub(crate) async fn fetch_issue_comments<T: Transport>(
    client: &T,
    login: &str,
    window: Window,
    date_field: Option<&str>,
) -> Result<Vec<Item>, FetchError> {
    fetch_user_comments(client, QueryKind::IssueComments, login, window, date_field).await
}

async fn fetch_user_comments<T: Transport>(
    client: &T,
    query: QueryKind,
    login: &str,
    window: Window,
    date_field: Option<&str>,
) -> Result<Vec<Item>, FetchError> {
    let date_field = date_field.unwrap_or(query.date_field());
    let mut pages = GraphqlPages::new(client, query, variables([("login", json!(login))]));
    let comments = fetch_windowed(&mut pages, window, date_field, query.nodes_path()).await?;
    tracing::info!(query = ?query, login, count = comments.len(), "fetched comments");
    Ok(comments)
}

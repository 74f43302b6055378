use serde_json::json;

use super::dispatch::dispatch_windowed;
use super::fetch::collect_nodes;
use super::queries::{QueryKind, variables};
use super::types::*;
use super::window::retain_in_window;
use crate::github::client::Transport;
use crate::github::error::FetchError;

/// `contributionsCollection` rejects ranges longer than a year.
const MAX_COLLECTION_SPAN_DAYS: i64 = 364;

pub(crate) async fn fetch_issues<T: Transport>(
    client: &T,
    login: &str,
    window: Window,
) -> Result<Vec<Item>, FetchError> {
    fetch_contributions(client, QueryKind::Issues, login, window).await
}

pub(crate) async fn fetch_pull_requests<T: Transport>(
    client: &T,
    login: &str,
    window: Window,
) -> Result<Vec<Item>, FetchError> {
    fetch_contributions(client, QueryKind::PullRequests, login, window).await
}

pub(crate) async fn fetch_pull_request_reviews<T: Transport>(
    client: &T,
    login: &str,
    window: Window,
) -> Result<Vec<Item>, FetchError> {
    fetch_contributions(client, QueryKind::PullRequestReviews, login, window).await
}

async fn fetch_contributions<T: Transport>(
    client: &T,
    query: QueryKind,
    login: &str,
    window: Window,
) -> Result<Vec<Item>, FetchError> {
    let mut pages = dispatch_windowed(
        client,
        query,
        variables([("login", json!(login))]),
        window,
        Some(chrono::Duration::days(MAX_COLLECTION_SPAN_DAYS)),
    );
    let nodes = collect_nodes(&mut pages, query.nodes_path()).await?;
    let nodes = retain_in_window(nodes, query.date_field(), window)?;
    tracing::info!(query = ?query, login, count = nodes.len(), "fetched contributions");
    Ok(nodes)
}

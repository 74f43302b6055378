use futures::future::try_join_all;
use serde_json::{Value, json};
use valq::query_value;

use super::dispatch::dispatch_windowed;
use super::fetch::collect_nodes;
use super::queries::{QueryKind, variables};
use super::types::*;
use super::window::retain_in_window;
use crate::github::client::Transport;
use crate::github::error::FetchError;

/// Commits authored by `author_id` on the default branch of `owner/name`
/// within `window`, newest first.
///
/// Unless `options.no_files` is set, every commit gains a `files` field
/// from the REST commit endpoint. Those lookups run concurrently and all
/// must succeed.
pub(crate) async fn fetch_repository_commits<T: Transport>(
    client: &T,
    author_id: &str,
    owner: &str,
    name: &str,
    window: Window,
    options: FetchOptions,
) -> Result<Vec<Item>, FetchError> {
    let query = QueryKind::Commits;
    let template = variables([
        ("owner", json!(owner)),
        ("name", json!(name)),
        ("authorId", json!(author_id)),
    ]);
    let mut pages = dispatch_windowed(client, query, template, window, None);
    let commits = collect_nodes(&mut pages, query.nodes_path()).await?;
    let commits = retain_in_window(commits, query.date_field(), window)?;

    tracing::info!(repo = %format!("{owner}/{name}"), count = commits.len(), "fetched commits");
    if options.no_files {
        return Ok(commits);
    }

    try_join_all(
        commits
            .into_iter()
            .map(|commit| attach_files(client, owner, name, commit)),
    )
    .await
}

async fn attach_files<T: Transport>(
    client: &T,
    owner: &str,
    name: &str,
    mut commit: Item,
) -> Result<Item, FetchError> {
    let oid = query_value!(commit.oid -> str)
        .map(str::to_string)
        .ok_or(FetchError::MissingField("oid"))?;

    let detail = client.commit(owner, name, &oid).await?;
    let files = detail.get("files").cloned().unwrap_or(Value::Null);
    if let Some(commit) = commit.as_object_mut() {
        commit.insert("files".to_string(), files);
    }
    Ok(commit)
}

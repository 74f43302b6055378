use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};

use serde_json::{Value, json};

use super::pages::PageSource;
use super::types::GraphqlResponse;
use crate::github::client::Transport;
use crate::github::error::FetchError;

/// Page source over canned pages, counting pulls. A `None` entry fails
/// the pull that reaches it.
pub(crate) struct VecPages {
    pages: VecDeque<Option<Value>>,
    pulled: usize,
}

impl VecPages {
    pub(crate) fn new(pages: impl IntoIterator<Item = Value>) -> Self {
        Self {
            pages: pages.into_iter().map(Some).collect(),
            pulled: 0,
        }
    }

    /// Appends a pull that fails.
    pub(crate) fn then_fail(mut self) -> Self {
        self.pages.push_back(None);
        self
    }

    pub(crate) fn pulled(&self) -> usize {
        self.pulled
    }
}

impl PageSource for VecPages {
    async fn next_page(&mut self) -> Result<Option<Value>, FetchError> {
        let Some(page) = self.pages.pop_front() else {
            return Ok(None);
        };
        self.pulled += 1;
        page.map(Some)
            .ok_or_else(|| FetchError::Graphql("connection reset".to_string()))
    }
}

/// Transport replaying GraphQL envelopes in order and recording requests.
/// Commit lookups answer with one file named after the ref, unless the
/// ref was registered with [`Scripted::failing_commit`].
#[derive(Default)]
pub(crate) struct Scripted {
    responses: RefCell<VecDeque<Value>>,
    requests: RefCell<Vec<Value>>,
    commit_calls: RefCell<Vec<String>>,
    failing_refs: HashSet<String>,
}

impl Scripted {
    pub(crate) fn new(responses: impl IntoIterator<Item = Value>) -> Self {
        Self {
            responses: RefCell::new(responses.into_iter().collect()),
            ..Default::default()
        }
    }

    pub(crate) fn failing_commit(mut self, reference: &str) -> Self {
        self.failing_refs.insert(reference.to_string());
        self
    }

    pub(crate) fn requests(&self) -> Vec<Value> {
        self.requests.borrow().clone()
    }

    pub(crate) fn commit_calls(&self) -> Vec<String> {
        self.commit_calls.borrow().clone()
    }
}

impl Transport for Scripted {
    async fn graphql(&self, payload: &Value) -> Result<GraphqlResponse<Value>, FetchError> {
        self.requests.borrow_mut().push(payload.clone());
        let next = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected GraphQL request: {payload}"));
        Ok(serde_json::from_value(next).unwrap())
    }

    async fn commit(&self, owner: &str, name: &str, reference: &str) -> Result<Value, FetchError> {
        self.commit_calls
            .borrow_mut()
            .push(format!("{owner}/{name}@{reference}"));
        if self.failing_refs.contains(reference) {
            return Err(FetchError::Graphql(format!("commit {reference} not found")));
        }
        Ok(json!({
            "sha": reference,
            "files": [{ "filename": format!("{reference}.rs"), "additions": 1 }],
        }))
    }
}

fn page_info(cursor: Option<&str>) -> Value {
    json!({ "hasNextPage": cursor.is_some(), "endCursor": cursor })
}

/// `user.issueComments` envelope with one comment per `publishedAt` date.
pub(crate) fn issue_comments_page(dates: &[&str], cursor: Option<&str>) -> Value {
    let nodes: Vec<_> = dates
        .iter()
        .map(|date| json!({ "url": format!("https://github.test/c/{date}"), "publishedAt": date }))
        .collect();
    json!({ "data": { "user": { "issueComments": {
        "pageInfo": page_info(cursor),
        "nodes": nodes,
    } } } })
}

/// `user.commitComments` envelope with one comment per `publishedAt` date.
pub(crate) fn commit_comments_page(dates: &[&str], cursor: Option<&str>) -> Value {
    let nodes: Vec<_> = dates
        .iter()
        .map(|date| json!({ "body": "lgtm", "publishedAt": date }))
        .collect();
    json!({ "data": { "user": { "commitComments": {
        "pageInfo": page_info(cursor),
        "nodes": nodes,
    } } } })
}

/// Commit history envelope; each entry is `(oid, committedDate)`.
pub(crate) fn commits_page(commits: &[(&str, &str)], cursor: Option<&str>) -> Value {
    let nodes: Vec<_> = commits
        .iter()
        .map(|(oid, date)| json!({ "oid": oid, "committedDate": date }))
        .collect();
    json!({ "data": { "repository": { "defaultBranchRef": { "target": { "history": {
        "pageInfo": page_info(cursor),
        "nodes": nodes,
    } } } } } })
}

/// `contributionsCollection` envelope for `connection`, one node per
/// `occurredAt` date.
pub(crate) fn contributions_page(connection: &str, dates: &[&str], cursor: Option<&str>) -> Value {
    let nodes: Vec<_> = dates
        .iter()
        .map(|date| json!({ "occurredAt": date }))
        .collect();
    json!({ "data": { "user": { "contributionsCollection": {
        connection: { "pageInfo": page_info(cursor), "nodes": nodes },
    } } } })
}

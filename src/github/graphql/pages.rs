use serde_json::{Map, Value, json};
use valq::query_value;

use super::fetch::{MAX_PAGES, graphql_data};
use super::queries::QueryKind;
use crate::github::client::Transport;
use crate::github::error::FetchError;

/// Pull-driven stream of response pages.
///
/// Nothing is fetched ahead: each call performs at most one request, and
/// `Ok(None)` means the stream is exhausted.
pub(crate) trait PageSource {
    async fn next_page(&mut self) -> Result<Option<Value>, FetchError>;
}

/// Cursor pagination over a single GraphQL connection.
pub(crate) struct GraphqlPages<'a, T> {
    transport: &'a T,
    query: QueryKind,
    variables: Map<String, Value>,
    cursor: Option<String>,
    pulled: usize,
    exhausted: bool,
}

impl<'a, T: Transport> GraphqlPages<'a, T> {
    /// `cursor` is managed here and overrides any caller-supplied value.
    pub(crate) fn new(transport: &'a T, query: QueryKind, variables: Map<String, Value>) -> Self {
        Self {
            transport,
            query,
            variables,
            cursor: None,
            pulled: 0,
            exhausted: false,
        }
    }
}

impl<T: Transport> PageSource for GraphqlPages<'_, T> {
    async fn next_page(&mut self) -> Result<Option<Value>, FetchError> {
        if self.exhausted {
            return Ok(None);
        }
        if self.pulled >= MAX_PAGES {
            tracing::warn!(query = ?self.query, pages = self.pulled, "page limit reached");
            self.exhausted = true;
            return Ok(None);
        }

        let mut variables = self.variables.clone();
        variables.insert("cursor".to_string(), json!(self.cursor));
        let payload = json!({
            "query": self.query.as_str(),
            "variables": variables,
        });

        let resp = self.transport.graphql(&payload).await?;
        let data = graphql_data(resp)?;
        self.pulled += 1;

        match next_cursor(&data, self.query.connection_path()) {
            Some(cursor) => self.cursor = Some(cursor),
            None => self.exhausted = true,
        }
        tracing::debug!(
            query = ?self.query,
            page = self.pulled,
            has_next = !self.exhausted,
            "fetched page"
        );

        Ok(Some(data))
    }
}

/// Cursor of the following page, or `None` when this is the last one.
fn next_cursor(data: &Value, connection_path: &[&str]) -> Option<String> {
    let connection = connection_path
        .iter()
        .try_fold(data, |value, key| value.get(*key))?;
    let has_next_page = query_value!(connection.pageInfo.hasNextPage -> bool)?;
    if !has_next_page {
        return None;
    }
    query_value!(connection.pageInfo.endCursor -> str).map(str::to_string)
}

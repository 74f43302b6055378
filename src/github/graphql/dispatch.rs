use chrono::SecondsFormat;
use serde_json::{Map, Value, json};

use super::pages::{GraphqlPages, PageSource};
use super::queries::QueryKind;
use super::types::Window;
use crate::github::client::Transport;
use crate::github::error::FetchError;

/// Pages of a date-parameterized query, one paginated run per sub-window.
///
/// Each run gets `fromDate`/`toDate` merged into the variable template.
/// No early termination happens here: the server already bounds results.
pub(crate) struct WindowedPages<'a, T> {
    transport: &'a T,
    query: QueryKind,
    template: Map<String, Value>,
    windows: std::vec::IntoIter<Window>,
    current: Option<GraphqlPages<'a, T>>,
}

/// Splits `window` into sub-windows of at most `max_span` (or keeps it
/// whole when `None`) and chains their page streams, newest first.
pub(crate) fn dispatch_windowed<'a, T: Transport>(
    transport: &'a T,
    query: QueryKind,
    template: Map<String, Value>,
    window: Window,
    max_span: Option<chrono::Duration>,
) -> WindowedPages<'a, T> {
    let windows = match max_span {
        Some(span) => window.split(span),
        None if window.is_empty() => Vec::new(),
        None => vec![window],
    };
    tracing::debug!(query = ?query, windows = windows.len(), "dispatching windowed query");
    WindowedPages {
        transport,
        query,
        template,
        windows: windows.into_iter(),
        current: None,
    }
}

impl<T: Transport> PageSource for WindowedPages<'_, T> {
    async fn next_page(&mut self) -> Result<Option<Value>, FetchError> {
        loop {
            if let Some(pages) = self.current.as_mut() {
                if let Some(page) = pages.next_page().await? {
                    return Ok(Some(page));
                }
                self.current = None;
            }

            let Some(window) = self.windows.next() else {
                return Ok(None);
            };
            let mut variables = self.template.clone();
            variables.insert("fromDate".to_string(), json!(timestamp(window.from)));
            variables.insert("toDate".to_string(), json!(timestamp(window.to)));
            self.current = Some(GraphqlPages::new(self.transport, self.query, variables));
        }
    }
}

fn timestamp(at: chrono::DateTime<chrono::Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

use super::nodes::extract_nodes;
use super::pages::PageSource;
use super::types::*;
use super::window::{parse_date, retain_in_window};
use crate::github::error::FetchError;

pub(super) const MAX_PAGES: usize = 1000;

pub(super) fn graphql_data<T>(resp: GraphqlResponse<T>) -> Result<T, FetchError> {
    if let Some(errors) = resp.errors
        && !errors.is_empty()
    {
        let msg = errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(FetchError::Graphql(msg));
    }
    resp.data.ok_or(FetchError::MissingData)
}

/// Pulls pages newest-first until one starts before `window.from`, then
/// trims the accumulated nodes to `window` on `date_field`.
///
/// The source must deliver nodes in reverse-chronological order of
/// `date_field`; this is assumed, not checked. Items straddling the lower
/// bound are fetched and then dropped by the final filter.
pub(crate) async fn fetch_windowed<S: PageSource>(
    source: &mut S,
    window: Window,
    date_field: &str,
    nodes_path: &[&str],
) -> Result<Vec<Item>, FetchError> {
    let mut out = Vec::new();

    while let Some(page) = source.next_page().await? {
        let nodes = extract_nodes(&page, nodes_path);
        let past_window = match nodes.first() {
            Some(newest) => window.from > parse_date(newest, date_field)?,
            None => false,
        };
        out.extend(nodes);
        if past_window {
            tracing::debug!(fetched = out.len(), "page starts before window; stopping");
            break;
        }
    }

    retain_in_window(out, date_field, window)
}

/// Drains `source` completely, concatenating node lists in arrival order.
pub(crate) async fn collect_nodes<S: PageSource>(
    source: &mut S,
    nodes_path: &[&str],
) -> Result<Vec<Item>, FetchError> {
    let mut out = Vec::new();
    while let Some(page) = source.next_page().await? {
        out.extend(extract_nodes(&page, nodes_path));
    }
    Ok(out)
}

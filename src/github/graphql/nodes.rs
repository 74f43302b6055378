use super::types::Item;

/// Walks `path` from the page root and returns the node list found there.
///
/// Any missing, null or non-array step yields an empty list; a user
/// without that connection is simply "no data", not an error. The list
/// itself is returned verbatim.
pub(crate) fn extract_nodes(page: &serde_json::Value, path: &[&str]) -> Vec<Item> {
    path.iter()
        .try_fold(page, |value, key| value.get(*key))
        .and_then(|nodes| nodes.as_array())
        .cloned()
        .unwrap_or_default()
}

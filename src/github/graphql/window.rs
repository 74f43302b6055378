use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::types::{Item, Window};
use crate::github::error::FetchError;

/// Reads `item[field]` as an ISO 8601 timestamp.
pub(crate) fn parse_date(item: &Item, field: &str) -> Result<DateTime<Utc>, FetchError> {
    let raw = item.get(field).and_then(|value| value.as_str());
    raw.and_then(parse_iso8601)
        .ok_or_else(|| FetchError::MalformedDate {
            field: field.to_string(),
            value: raw.map(str::to_string),
        })
}

/// RFC 3339 first; a timestamp without offset is UTC, a bare date is UTC
/// midnight.
fn parse_iso8601(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}

/// Predicate keeping items whose `field` lies in `window`.
pub(crate) fn window_filter(
    field: &str,
    window: Window,
) -> impl Fn(&Item) -> Result<bool, FetchError> + '_ {
    move |item: &Item| parse_date(item, field).map(|at| window.contains(at))
}

/// Drops out-of-window items, keeping the relative order of the rest.
/// The first malformed date aborts the whole filter.
pub(crate) fn retain_in_window(
    items: Vec<Item>,
    field: &str,
    window: Window,
) -> Result<Vec<Item>, FetchError> {
    let keep = window_filter(field, window);
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if keep(&item)? {
            out.push(item);
        }
    }
    Ok(out)
}

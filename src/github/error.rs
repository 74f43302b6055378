/// Failures surfaced by the contribution fetchers.
///
/// None of these are recovered inside a fetch: the first one aborts the
/// whole call and no partial result is returned.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("GitHub request failed")]
    Transport(#[from] octocrab::Error),

    #[error("GraphQL returned errors: {0}")]
    Graphql(String),

    #[error("GraphQL response missing data")]
    MissingData,

    /// An item lacks a field needed for a follow-up request.
    #[error("item missing field `{0}`")]
    MissingField(&'static str),

    /// The date field of an item is absent, not a string, or not ISO 8601.
    #[error("malformed date in field `{field}`: {value:?}")]
    MalformedDate {
        field: String,
        value: Option<String>,
    },
}

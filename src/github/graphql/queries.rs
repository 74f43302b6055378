use serde_json::{Map, Value};

pub(crate) const COMMITS_QUERY: &str = include_str!("queries/commits.graphql");
pub(crate) const COMMIT_COMMENTS_QUERY: &str = include_str!("queries/commit_comments.graphql");
pub(crate) const ISSUE_COMMENTS_QUERY: &str = include_str!("queries/issue_comments.graphql");
pub(crate) const ISSUES_QUERY: &str = include_str!("queries/issues.graphql");
pub(crate) const PULL_REQUESTS_QUERY: &str = include_str!("queries/pull_requests.graphql");
pub(crate) const PULL_REQUEST_REVIEWS_QUERY: &str =
    include_str!("queries/pull_request_reviews.graphql");
pub(crate) const USER_INFO_QUERY: &str = include_str!("queries/user_info.graphql");

/// Paginated queries, each walking a single connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QueryKind {
    Commits,
    CommitComments,
    IssueComments,
    Issues,
    PullRequests,
    PullRequestReviews,
}

impl QueryKind {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            QueryKind::Commits => COMMITS_QUERY,
            QueryKind::CommitComments => COMMIT_COMMENTS_QUERY,
            QueryKind::IssueComments => ISSUE_COMMENTS_QUERY,
            QueryKind::Issues => ISSUES_QUERY,
            QueryKind::PullRequests => PULL_REQUESTS_QUERY,
            QueryKind::PullRequestReviews => PULL_REQUEST_REVIEWS_QUERY,
        }
    }

    /// Keys leading from the response `data` to the node list.
    pub(crate) fn nodes_path(&self) -> &'static [&'static str] {
        match self {
            QueryKind::Commits => &[
                "repository",
                "defaultBranchRef",
                "target",
                "history",
                "nodes",
            ],
            QueryKind::CommitComments => &["user", "commitComments", "nodes"],
            QueryKind::IssueComments => &["user", "issueComments", "nodes"],
            QueryKind::Issues => &[
                "user",
                "contributionsCollection",
                "issueContributions",
                "nodes",
            ],
            QueryKind::PullRequests => &[
                "user",
                "contributionsCollection",
                "pullRequestContributions",
                "nodes",
            ],
            QueryKind::PullRequestReviews => &[
                "user",
                "contributionsCollection",
                "pullRequestReviewContributions",
                "nodes",
            ],
        }
    }

    /// The connection object holding `nodes` and `pageInfo`.
    pub(crate) fn connection_path(&self) -> &'static [&'static str] {
        let path = self.nodes_path();
        &path[..path.len() - 1]
    }

    /// Date field the results are windowed on.
    pub(crate) fn date_field(&self) -> &'static str {
        match self {
            QueryKind::Commits => "committedDate",
            QueryKind::CommitComments | QueryKind::IssueComments => "publishedAt",
            QueryKind::Issues | QueryKind::PullRequests | QueryKind::PullRequestReviews => {
                "occurredAt"
            }
        }
    }
}

/// Query variables from `(name, value)` pairs.
pub(crate) fn variables<const N: usize>(pairs: [(&str, Value); N]) -> Map<String, Value> {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

mod auth;
mod client;
mod error;
mod graphql;

pub use client::Client;
pub use graphql::{Contributions, FetchOptions, Item, UserInfo, Window};
pub(crate) use graphql::{
    fetch_commit_comments, fetch_issue_comments, fetch_issues, fetch_pull_request_reviews,
    fetch_pull_requests, fetch_repository_commits, fetch_user_info, query_viewer_login,
};

pub(crate) mod prelude {
    pub use super::{Client, Contributions, FetchOptions, Window};
    pub(crate) use super::{
        fetch_commit_comments, fetch_issue_comments, fetch_issues, fetch_pull_request_reviews,
        fetch_pull_requests, fetch_repository_commits, fetch_user_info, query_viewer_login,
    };
}

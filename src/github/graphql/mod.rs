mod comments;
mod commits;
mod contributions;
mod dispatch;
mod fetch;
mod nodes;
mod pages;
mod queries;
#[cfg(test)]
mod testing;
mod types;
mod user;
mod window;

pub use types::{Contributions, FetchOptions, Item, UserInfo, Window};

pub(crate) use comments::{fetch_commit_comments, fetch_issue_comments};
pub(crate) use commits::fetch_repository_commits;
pub(crate) use contributions::{fetch_issues, fetch_pull_request_reviews, fetch_pull_requests};
pub(crate) use types::GraphqlResponse;
pub(crate) use user::{fetch_user_info, query_viewer_login};

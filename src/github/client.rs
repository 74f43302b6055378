use anyhow::Context;
use serde_json::Value;

use super::auth::fetch_token;
use super::error::FetchError;
use super::graphql::GraphqlResponse;

/// The two GitHub calls the fetchers are built on.
pub(crate) trait Transport {
    /// Posts a `{ query, variables }` payload to the GraphQL endpoint.
    async fn graphql(&self, payload: &Value) -> Result<GraphqlResponse<Value>, FetchError>;

    /// `GET /repos/{owner}/{name}/commits/{reference}`.
    async fn commit(&self, owner: &str, name: &str, reference: &str) -> Result<Value, FetchError>;
}

pub struct Client {
    octocrab: octocrab::Octocrab,
}

impl Client {
    pub fn new(host: &str) -> anyhow::Result<Self> {
        let token = fetch_token(host)?;
        let octocrab = build_github_client(host, token)?;
        Ok(Self { octocrab })
    }
}

impl Transport for Client {
    async fn graphql(&self, payload: &Value) -> Result<GraphqlResponse<Value>, FetchError> {
        Ok(self.octocrab.graphql(payload).await?)
    }

    async fn commit(&self, owner: &str, name: &str, reference: &str) -> Result<Value, FetchError> {
        let route = format!("/repos/{owner}/{name}/commits/{reference}");
        Ok(self.octocrab.get(route, None::<&()>).await?)
    }
}

fn build_github_client(host: &str, token: String) -> anyhow::Result<octocrab::Octocrab> {
    let client = octocrab::Octocrab::builder()
        .base_uri(api_base_url(host))
        .context("failed to set base URI")?
        .personal_token(token)
        .build()
        .context("failed to build GitHub client")?;
    Ok(client)
}

fn api_base_url(host: &str) -> String {
    if host.eq_ignore_ascii_case("github.com") {
        "https://api.github.com".to_string()
    } else {
        format!("https://{host}/api")
    }
}

//! Pinned repositories client
//!
//! GitHub's REST API does not expose profile pins, so this client talks to a
//! third-party endpoint that scrapes them. It is an alternate feed source.

use crate::client::PinnedReposClient;
use crate::types::PinnedRepository;
use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use reqwest::Url;

/// Default pinned repositories endpoint
pub const DEFAULT_PINNED_ENDPOINT: &str = "https://gh-pinned-repos.egoist.dev/";

const USER_AGENT: &str = concat!("gh-folio/", env!("CARGO_PKG_VERSION"));

/// reqwest-based client for the pinned repositories endpoint
#[derive(Debug, Clone)]
pub struct PinnedReposHttpClient {
    endpoint: String,
    http: reqwest::Client,
}

impl PinnedReposHttpClient {
    /// Create a client for the given endpoint base URL
    pub fn new(endpoint: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    /// URL queried for a given user
    pub fn request_url(&self, username: &str) -> anyhow::Result<Url> {
        Url::parse_with_params(&self.endpoint, &[("username", username)])
            .with_context(|| format!("Invalid pinned repositories endpoint: {}", self.endpoint))
    }
}

#[async_trait]
impl PinnedReposClient for PinnedReposHttpClient {
    async fn fetch_pinned(&self, username: &str) -> anyhow::Result<Vec<PinnedRepository>> {
        let url = self.request_url(username)?;
        debug!("Fetching pinned repositories from {}", url);

        let pinned = self
            .http
            .get(url)
            .send()
            .await
            .context("Pinned repositories request failed")?
            .error_for_status()
            .context("Pinned repositories endpoint returned an error status")?
            .json::<Vec<PinnedRepository>>()
            .await
            .context("Failed to decode pinned repositories")?;

        debug!("Fetched {} pinned repositories for {}", pinned.len(), username);
        Ok(pinned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_encodes_username() {
        let client = PinnedReposHttpClient::new(DEFAULT_PINNED_ENDPOINT).unwrap();
        let url = client.request_url("c137v8").unwrap();
        assert_eq!(
            url.as_str(),
            "https://gh-pinned-repos.egoist.dev/?username=c137v8"
        );

        let url = client.request_url("a b&c").unwrap();
        assert_eq!(url.query(), Some("username=a+b%26c"));
    }

    #[test]
    fn test_invalid_endpoint_is_an_error() {
        let client = PinnedReposHttpClient::new("not a url").unwrap();
        assert!(client.request_url("c137v8").is_err());
    }
}

//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab library.
//! Responses are decoded into this crate's own DTOs so the application does not
//! depend on octocrab's model types.

use crate::client::GitHubClient;
use crate::types::{ContentEntry, RepoListQuery, Repository};
use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use std::sync::Arc;

/// Build an unauthenticated octocrab instance with request retries disabled
///
/// A failed request is reported to the caller as-is.
fn build_single_attempt(base_uri: Option<&str>) -> anyhow::Result<Octocrab> {
    let mut builder = Octocrab::builder().add_retry_config(RetryConfig::None);
    if let Some(uri) = base_uri {
        builder = builder.base_uri(uri).context("Failed to set base URI")?;
    }
    builder.build().context("Failed to build GitHub client")
}

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Create an unauthenticated client for public data
    ///
    /// Must be called from within a tokio runtime.
    pub fn anonymous() -> anyhow::Result<Self> {
        Ok(Self::new(Arc::new(build_single_attempt(None)?)))
    }

    /// Create an unauthenticated client against a different API root
    ///
    /// Must be called from within a tokio runtime.
    pub fn anonymous_with_base_uri(base_uri: &str) -> anyhow::Result<Self> {
        Ok(Self::new(Arc::new(build_single_attempt(Some(base_uri))?)))
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn list_user_repositories(
        &self,
        owner: &str,
        query: &RepoListQuery,
    ) -> anyhow::Result<Vec<Repository>> {
        debug!("Listing repositories for {} ({:?})", owner, query);

        let route = format!("/users/{}/repos", owner);
        let repos: Vec<Repository> = self
            .octocrab
            .get(route, Some(query))
            .await
            .with_context(|| format!("Failed to list repositories for {}", owner))?;

        debug!("Fetched {} repositories for {}", repos.len(), owner);
        Ok(repos)
    }

    async fn list_repository_contents(
        &self,
        owner: &str,
        repo: &str,
    ) -> anyhow::Result<Vec<ContentEntry>> {
        debug!("Listing contents of {}/{}", owner, repo);

        let route = format!("/repos/{}/{}/contents", owner, repo);
        let entries: Vec<ContentEntry> = self
            .octocrab
            .get(route, None::<&()>)
            .await
            .with_context(|| format!("Failed to list contents of {}/{}", owner, repo))?;

        Ok(entries)
    }
}

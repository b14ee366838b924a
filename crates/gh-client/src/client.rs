//! Client trait definitions
//!
//! This module defines the `GitHubClient` trait for the GitHub REST API and
//! the `PinnedReposClient` trait for the third-party pinned repositories
//! endpoint.

use crate::types::{ContentEntry, PinnedRepository, RepoListQuery, Repository};
use async_trait::async_trait;

/// GitHub API client trait
///
/// Defines the read-only interface the portfolio feed needs from the
/// GitHub API. Implementations can be direct (hitting the API) or test
/// doubles.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::{GitHubClient, RepoListQuery, Repository};
///
/// async fn list(client: &dyn GitHubClient) -> anyhow::Result<Vec<Repository>> {
///     client.list_user_repositories("rust-lang", &RepoListQuery::default()).await
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// List the public repositories of a user account
    ///
    /// # Arguments
    ///
    /// * `owner` - The account login
    /// * `query` - Optional sort, direction and page-size parameters
    ///
    /// # Returns
    ///
    /// The first page of repositories, or an error on network failure or a
    /// non-success HTTP status.
    async fn list_user_repositories(
        &self,
        owner: &str,
        query: &RepoListQuery,
    ) -> anyhow::Result<Vec<Repository>>;

    /// List the top-level entries of a repository's default branch
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    async fn list_repository_contents(
        &self,
        owner: &str,
        repo: &str,
    ) -> anyhow::Result<Vec<ContentEntry>>;
}

/// Client for the third-party pinned repositories endpoint
#[async_trait]
pub trait PinnedReposClient: Send + Sync {
    /// Fetch the repositories pinned on a user's profile
    async fn fetch_pinned(&self, username: &str) -> anyhow::Result<Vec<PinnedRepository>>;
}

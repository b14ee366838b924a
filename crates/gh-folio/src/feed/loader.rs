//! Feed loader
//!
//! One `fetch` call is one load attempt: a single primary request, then the
//! filter / order / enrich pipeline. There are no retries and no timeout; an
//! unresponsive primary request keeps the caller's state at `Loading`.

use crate::domain_models::RepoSummary;
use crate::feed::preview::enrich_with_previews;
use crate::feed::{FeedError, FeedRequest, FeedSource};
use gh_client::{GitHubClient, PinnedReposClient};
use std::cmp::Reverse;
use std::sync::Arc;

/// Loads the repository feed from GitHub or the pinned repositories endpoint
#[derive(Clone)]
pub struct FeedLoader {
    github: Arc<dyn GitHubClient>,
    pinned: Arc<dyn PinnedReposClient>,
}

impl FeedLoader {
    pub fn new(github: Arc<dyn GitHubClient>, pinned: Arc<dyn PinnedReposClient>) -> Self {
        Self { github, pinned }
    }

    /// Fetch, filter, order and enrich
    pub async fn fetch(&self, request: &FeedRequest) -> Result<Vec<RepoSummary>, FeedError> {
        let repos = match request.source {
            FeedSource::Pinned => self.fetch_pinned(&request.account).await?,
            FeedSource::TopStarred | FeedSource::Recent { .. } => {
                self.fetch_listing(request).await?
            }
        };

        let fetched = repos.len();
        let mut repos = filter_presentable(repos);
        log::debug!(
            "FeedLoader: {} of {} repositories have a description",
            repos.len(),
            fetched
        );

        if let FeedSource::Recent { count } = request.source {
            repos = most_recently_pushed(repos, count);
        }

        if request.with_previews {
            repos = enrich_with_previews(self.github.as_ref(), repos).await;
            log::debug!(
                "FeedLoader: {} of {} repositories have a preview image",
                repos.iter().filter(|r| r.preview_image.is_some()).count(),
                repos.len()
            );
        }

        Ok(repos)
    }

    async fn fetch_listing(&self, request: &FeedRequest) -> Result<Vec<RepoSummary>, FeedError> {
        let repos = self
            .github
            .list_user_repositories(&request.account, &request.list_query())
            .await
            .map_err(|e| FeedError::list_repositories(&request.account, &e))?;

        Ok(repos.iter().map(RepoSummary::from_api).collect())
    }

    async fn fetch_pinned(&self, account: &str) -> Result<Vec<RepoSummary>, FeedError> {
        let pinned = self
            .pinned
            .fetch_pinned(account)
            .await
            .map_err(|e| FeedError::pinned_repositories(account, &e))?;

        Ok(pinned
            .iter()
            .enumerate()
            .map(|(position, entry)| RepoSummary::from_pinned(position, entry, account))
            .collect())
    }
}

/// Drop repositories without a description
pub fn filter_presentable(repos: Vec<RepoSummary>) -> Vec<RepoSummary> {
    repos.into_iter().filter(RepoSummary::is_presentable).collect()
}

/// The `count` most recently pushed repositories, newest first
///
/// Repositories that were never pushed sort last.
pub fn most_recently_pushed(mut repos: Vec<RepoSummary>, count: usize) -> Vec<RepoSummary> {
    repos.sort_by_key(|repo| Reverse(repo.pushed_at));
    repos.truncate(count);
    repos
}

//! Feed request parameters

use gh_client::{RepoListQuery, RepoSort, SortDirection};
use gh_folio_config::{AppConfig, FeedSourceKind};

/// Where the feed comes from and how it is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedSource {
    /// API listing sorted by stars, API order kept
    TopStarred,
    /// API listing re-sorted by last push, capped to `count`
    Recent { count: usize },
    /// Third-party pinned repositories endpoint
    Pinned,
}

/// Everything one load attempt needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    pub account: String,
    pub source: FeedSource,
    pub per_page: u8,
    pub with_previews: bool,
}

impl FeedRequest {
    pub fn from_config(config: &AppConfig) -> Self {
        let source = match config.feed.source {
            FeedSourceKind::TopStarred => FeedSource::TopStarred,
            FeedSourceKind::Recent => FeedSource::Recent {
                count: config.feed.recent_count,
            },
            FeedSourceKind::Pinned => FeedSource::Pinned,
        };

        Self {
            account: config.account.clone(),
            source,
            per_page: config.feed.per_page,
            with_previews: config.feed.previews,
        }
    }

    /// Query parameters for the repository listing
    pub fn list_query(&self) -> RepoListQuery {
        let query = RepoListQuery::default().per_page(self.per_page);
        match self.source {
            FeedSource::TopStarred => query.sort(RepoSort::Stars).direction(SortDirection::Desc),
            FeedSource::Recent { .. } => query.sort(RepoSort::Pushed).direction(SortDirection::Desc),
            FeedSource::Pinned => query,
        }
    }
}

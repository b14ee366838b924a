//! Repository feed actions

use crate::domain_models::RepoSummary;
use crate::feed::FeedError;
use std::sync::Arc;

/// Actions for the repository feed
#[derive(Debug, Clone)]
pub enum FeedAction {
    /// Request the feed load
    LoadStarted,
    /// Load attempt produced repositories
    Loaded(Arc<[RepoSummary]>),
    /// Load attempt failed
    Failed(FeedError),
}

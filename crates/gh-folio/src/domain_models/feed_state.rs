//! Feed state model
//!
//! `Loading` is initial. A load attempt settles into exactly one of `Error`
//! or `Ready`, after which the state never changes for that attempt.

use crate::domain_models::RepoSummary;
use crate::feed::FeedError;
use std::sync::Arc;

/// Result of one repository feed load attempt
#[derive(Debug, Clone, Default)]
pub enum FeedState {
    #[default]
    Loading,
    Error(FeedError),
    /// Published repositories; shared read-only with every reader
    Ready(Arc<[RepoSummary]>),
}

impl FeedState {
    /// Settle a loading feed with its repositories
    ///
    /// Ignored (returns `self` unchanged) once the feed has settled.
    pub fn ready(self, repos: Arc<[RepoSummary]>) -> Self {
        match self {
            FeedState::Loading => FeedState::Ready(repos),
            settled => {
                log::warn!("FeedState: ignoring Ready for an already settled feed");
                settled
            }
        }
    }

    /// Settle a loading feed with an error
    ///
    /// Ignored (returns `self` unchanged) once the feed has settled.
    pub fn fail(self, error: FeedError) -> Self {
        match self {
            FeedState::Loading => FeedState::Error(error),
            settled => {
                log::warn!("FeedState: ignoring Error for an already settled feed");
                settled
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FeedState::Loading)
    }

    /// Published repositories, empty unless `Ready`
    pub fn repositories(&self) -> &[RepoSummary] {
        match self {
            FeedState::Ready(repos) => repos,
            _ => &[],
        }
    }
}

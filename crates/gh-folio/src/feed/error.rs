use thiserror::Error;

/// Failure of the primary feed request
///
/// Only the primary request can fail a feed; preview lookups degrade to
/// "no preview" instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("Could not load repositories for {account}: {reason}")]
    ListRepositories { account: String, reason: String },

    #[error("Could not load pinned repositories for {account}: {reason}")]
    PinnedRepositories { account: String, reason: String },
}

impl FeedError {
    pub(crate) fn list_repositories(account: &str, error: &anyhow::Error) -> Self {
        FeedError::ListRepositories {
            account: account.to_string(),
            reason: format!("{:#}", error),
        }
    }

    pub(crate) fn pinned_repositories(account: &str, error: &anyhow::Error) -> Self {
        FeedError::PinnedRepositories {
            account: account.to_string(),
            reason: format!("{:#}", error),
        }
    }
}

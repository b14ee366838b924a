//! GitHub API client for portfolio repository feeds
//!
//! This crate provides trait-based access to the two data sources a
//! portfolio feed can be built from:
//!
//! - The GitHub REST API (repository listings and repository contents)
//! - A third-party "pinned repositories" endpoint
//!
//! Both sources sit behind async traits so the application can swap in
//! mock implementations for tests.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐   ┌──────────────────────────────┐
//! │          GitHubClient trait          │   │    PinnedReposClient trait   │
//! │  - list_user_repositories()          │   │  - fetch_pinned()            │
//! │  - list_repository_contents()        │   │                              │
//! └──────────────────────────────────────┘   └──────────────────────────────┘
//!                    │                                      │
//!                    ▼                                      ▼
//!          ┌─────────────────┐                 ┌────────────────────────┐
//!          │ OctocrabClient  │                 │ PinnedReposHttpClient  │
//!          │ (octocrab)      │                 │ (reqwest)              │
//!          └─────────────────┘                 └────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{GitHubClient, OctocrabClient, RepoListQuery, RepoSort, SortDirection};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = OctocrabClient::anonymous()?;
//! let query = RepoListQuery::default()
//!     .sort(RepoSort::Stars)
//!     .direction(SortDirection::Desc)
//!     .per_page(5);
//! let repos = client.list_user_repositories("c137v8", &query).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod octocrab_client;
pub mod pinned_client;
pub mod types;

pub use client::{GitHubClient, PinnedReposClient};
pub use octocrab_client::OctocrabClient;
pub use pinned_client::{PinnedReposHttpClient, DEFAULT_PINNED_ENDPOINT};
pub use types::{
    ContentEntry, ContentType, PinnedRepository, RepoListQuery, RepoSort, Repository,
    RepositoryOwner, SortDirection,
};

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;

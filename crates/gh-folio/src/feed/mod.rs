//! Repository feed
//!
//! Fetches the repositories shown in the projects section, filters out the
//! ones without a description, optionally keeps only the most recently
//! pushed, and optionally looks up a preview image for each of them.

pub mod error;
pub mod loader;
pub mod preview;
pub mod request;

pub use error::FeedError;
pub use loader::FeedLoader;
pub use request::{FeedRequest, FeedSource};

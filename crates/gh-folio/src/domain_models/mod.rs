//! Domain models
//!
//! Core domain types used throughout the application.
//! These are pure domain concepts, separate from UI state.

pub mod boot_message;
pub mod feed_state;
pub mod repo_summary;
pub mod splash_phase;

pub use boot_message::BootMessage;
pub use feed_state::FeedState;
pub use repo_summary::RepoSummary;
pub use splash_phase::{SplashEvent, SplashPhase};

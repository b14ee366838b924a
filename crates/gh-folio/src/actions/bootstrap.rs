//! Bootstrap actions
//!
//! Actions for application start-up and the splash handoff.

/// Actions for application bootstrap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapAction {
    /// Application started; mounts the splash and starts the feed load
    Start,
    /// Splash handed control to the portfolio
    End,
}

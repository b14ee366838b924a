//! Actions module
//!
//! All actions in the application, tagged by the domain they belong to:
//! - `Navigate`: generic navigation that the active view translates
//! - `Global`: application-wide actions
//! - Screen or domain specific variants that go straight to their reducer

pub mod bootstrap;
pub mod feed;
pub mod global;
pub mod navigation;
pub mod portfolio;
pub mod splash;

pub use bootstrap::BootstrapAction;
pub use feed::FeedAction;
pub use global::GlobalAction;
pub use navigation::NavigationAction;
pub use portfolio::PortfolioAction;
pub use splash::SplashAction;

/// Root action enum - tagged by screen/domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Generic navigation action - will be translated by active view
    Navigate(NavigationAction),
    /// Global application actions
    Global(GlobalAction),
    /// Bootstrap/initialization actions
    Bootstrap(BootstrapAction),
    /// Splash screen actions
    Splash(SplashAction),
    /// Repository feed actions
    Feed(FeedAction),
    /// Portfolio screen actions
    Portfolio(PortfolioAction),
}

impl Action {
    /// High-frequency actions that would flood the log
    pub fn is_animation_frame(&self) -> bool {
        matches!(self, Action::Splash(SplashAction::RainFrame(_)))
    }
}

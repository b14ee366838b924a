//! Application State

use crate::domain_models::FeedState;
use crate::views::{SplashView, View, ViewId};
use gh_folio_config::AppConfig;
use gh_folio_theme::Theme;

use super::{PortfolioState, SplashState};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the base, top views are overlays
    pub view_stack: Vec<Box<dyn View>>,
    pub splash: SplashState,
    pub feed: FeedState,
    pub portfolio: PortfolioState,
    pub theme: Theme,
    /// Application configuration
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(SplashView::new(&config.splash.title))],
            splash: SplashState::new(&config.splash),
            feed: FeedState::default(),
            portfolio: PortfolioState::default(),
            theme: Theme::default(),
            config,
        }
    }

    /// Get the top-most (active) view from the stack
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|view| view.as_ref())
    }

    pub fn active_view_id(&self) -> Option<ViewId> {
        self.active_view().map(|view| view.view_id())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("running", &self.running)
            .field("view_stack", &format!("{} views", self.view_stack.len()))
            .field("splash", &self.splash)
            .field("feed", &self.feed)
            .field("portfolio", &self.portfolio)
            .field("theme", &"<theme>")
            .field("config", &self.config)
            .finish()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

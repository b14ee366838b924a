//! BrowserMiddleware - opens the selected repository in the browser

use crate::actions::{Action, PortfolioAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::utils::browser::{is_openable, open_url};
use tokio::runtime::Handle;

pub struct BrowserMiddleware {
    runtime: Handle,
}

impl BrowserMiddleware {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }
}

/// URL of the selected repository card, if there is one
pub fn selected_url(state: &AppState) -> Option<&str> {
    state
        .feed
        .repositories()
        .get(state.portfolio.selected)
        .map(|repo| repo.url.as_str())
}

impl Middleware for BrowserMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, _dispatcher: &Dispatcher) -> bool {
        if !matches!(action, Action::Portfolio(PortfolioAction::OpenSelected)) {
            return true;
        }

        match selected_url(state) {
            Some(url) if is_openable(url) => {
                self.runtime.spawn(open_url(url.to_string()));
            }
            Some(url) => log::warn!("BrowserMiddleware: refusing to open {}", url),
            None => log::debug!("BrowserMiddleware: nothing selected"),
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::FeedAction;
    use crate::domain_models::RepoSummary;
    use crate::reducers::app_reducer;
    use std::sync::Arc;

    fn repo(name: &str) -> RepoSummary {
        RepoSummary {
            id: 1,
            name: name.to_string(),
            owner: "c137v8".to_string(),
            description: "desc".to_string(),
            stars: 0,
            pushed_at: None,
            url: format!("https://github.com/c137v8/{name}"),
            preview_image: None,
        }
    }

    #[test]
    fn test_selected_url() {
        let state = AppState::default();
        assert_eq!(selected_url(&state), None);

        let repos: Arc<[RepoSummary]> = vec![repo("a"), repo("b")].into();
        let state = app_reducer::reduce(state, &Action::Feed(FeedAction::Loaded(repos)));
        let state = app_reducer::reduce(state, &Action::Portfolio(PortfolioAction::SelectNext));
        assert_eq!(selected_url(&state), Some("https://github.com/c137v8/b"));
    }
}

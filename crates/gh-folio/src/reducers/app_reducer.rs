use crate::actions::{Action, BootstrapAction, GlobalAction};
use crate::reducers::{feed_reducer, portfolio_reducer, splash_reducer};
use crate::state::AppState;
use crate::views::{PortfolioView, ViewId};

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
            return state;
        }
        Action::Global(GlobalAction::Close) => {
            // Pop the top-most view; closing the last one quits
            if state.view_stack.len() > 1 {
                let popped = state.view_stack.pop();
                log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
            } else {
                log::debug!("Closing last view - quitting application");
                state.running = false;
            }
        }
        Action::Bootstrap(BootstrapAction::End) => {
            // Handoff happens once, from the splash only
            if state.active_view_id() == Some(ViewId::Splash) {
                log::info!("Splash finished, showing portfolio");
                state.view_stack.clear();
                state.view_stack.push(Box::new(PortfolioView::new()));
            }
        }
        _ => {}
    }

    state.splash = splash_reducer::reduce(state.splash, action);
    state.feed = feed_reducer::reduce(state.feed, action);
    state.portfolio = portfolio_reducer::reduce(state.portfolio, action, state.feed.repositories().len());

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::SplashPhase;

    #[test]
    fn test_bootstrap_end_hands_off_to_portfolio() {
        let state = reduce(AppState::default(), &Action::Bootstrap(BootstrapAction::End));
        assert_eq!(state.active_view_id(), Some(ViewId::Portfolio));
        assert_eq!(state.view_stack.len(), 1);
        assert_eq!(state.splash.phase, SplashPhase::Done);
    }

    #[test]
    fn test_second_bootstrap_end_keeps_portfolio() {
        let state = reduce(AppState::default(), &Action::Bootstrap(BootstrapAction::End));
        let state = reduce(state, &Action::Bootstrap(BootstrapAction::End));
        assert_eq!(state.active_view_id(), Some(ViewId::Portfolio));
        assert_eq!(state.view_stack.len(), 1);
    }

    #[test]
    fn test_quit_and_close() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);

        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Close));
        assert!(!state.running);
    }
}

//! KeyboardMiddleware - translates keyboard events into actions
//!
//! ## Layer 1: Priority keys
//! Ctrl+C always quits.
//!
//! ## Layer 2: Capabilities
//! Views with `SKIP_ON_ANY_KEY` turn every other key into a skip.
//!
//! ## Layer 3: Bindings
//! `q` quits, `Esc` closes, navigation keys become generic `Navigate`
//! actions that the active view translates.

use crate::actions::{Action, GlobalAction, NavigationAction, SplashAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Default)]
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let capabilities = state
            .active_view()
            .map(|v| v.capabilities(state))
            .unwrap_or_default();

        // LAYER 1: Priority keys
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        // LAYER 2: Capability-based routing
        if capabilities.skips_on_any_key() {
            log::debug!("Layer 2: SKIP_ON_ANY_KEY - dispatching Skip");
            dispatcher.dispatch(Action::Splash(SplashAction::Skip));
            return;
        }

        // LAYER 3: Bindings
        let action = match key.code {
            KeyCode::Char('q') => Some(Action::Global(GlobalAction::Quit)),
            KeyCode::Esc => Some(Action::Global(GlobalAction::Close)),
            KeyCode::Down if capabilities.supports_item_navigation() => {
                Some(Action::Navigate(NavigationAction::Next))
            }
            KeyCode::Up if capabilities.supports_item_navigation() => {
                Some(Action::Navigate(NavigationAction::Previous))
            }
            KeyCode::Char('j') if capabilities.supports_vim_navigation() => {
                Some(Action::Navigate(NavigationAction::Next))
            }
            KeyCode::Char('k') if capabilities.supports_vim_navigation() => {
                Some(Action::Navigate(NavigationAction::Previous))
            }
            KeyCode::Enter | KeyCode::Char('o') if capabilities.supports_activation() => {
                Some(Action::Navigate(NavigationAction::Activate))
            }
            _ => None,
        };

        match action {
            Some(action) => dispatcher.dispatch(action),
            None => log::debug!("Unbound key: {:?}", key.code),
        }
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Global(GlobalAction::KeyPressed(key)) => {
                self.handle_key(*key, state, dispatcher);
                false
            }
            Action::Navigate(nav) => {
                let translated = state
                    .active_view()
                    .and_then(|view| view.translate_navigation(*nav));
                if let Some(translated) = translated {
                    dispatcher.dispatch(translated);
                }
                false
            }
            _ => true,
        }
    }
}

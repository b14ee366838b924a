use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod browser_middleware;
pub mod feed_middleware;
pub mod keyboard_middleware;
pub mod logging;
pub mod splash_middleware;

pub use browser_middleware::BrowserMiddleware;
pub use feed_middleware::FeedMiddleware;
pub use keyboard_middleware::KeyboardMiddleware;
pub use logging::LoggingMiddleware;
pub use splash_middleware::SplashMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the background thread. Anything slow (HTTP, timers,
/// spawning processes) is handed to the tokio runtime and reports back
/// through the dispatcher.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}

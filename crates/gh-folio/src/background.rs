//! Background worker thread that processes actions through middleware
//!
//! - Main thread handles rendering, user input and reducers
//! - Background thread runs the middleware chain
//! - Communication happens via channels
//!
//! Actions dispatched by middleware via Dispatcher re-enter the middleware
//! chain, e.g. `Bootstrap::Start` -> `Splash::Mount` + `Feed::LoadStarted`.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::thread;

/// Shared state that background can read (main thread writes via reducer)
pub type SharedState = Arc<RwLock<AppState>>;

/// Spawn the background worker thread
///
/// - `action_rx`: receives actions from main thread and from Dispatcher (re-entry)
/// - `action_tx`: used to create Dispatcher for middleware to dispatch actions that re-enter
/// - `result_tx`: sends actions to main thread for reducers (non-consumed actions)
/// - `state`: shared state for middleware to read
/// - `middleware`: the middleware chain
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(action_rx, action_tx, result_tx, state, middleware);
    })
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware>>,
) {
    log::info!("Background worker started");

    let dispatcher = Dispatcher::new(action_tx);

    while let Ok(action) = action_rx.recv() {
        if matches!(action, Action::Global(GlobalAction::Quit)) {
            log::info!("Background worker received shutdown signal");
            if result_tx.send(action).is_err() {
                log::error!("Failed to send quit action to main thread");
            }
            break;
        }

        // Get current state snapshot for middleware
        let current_state = match state.read() {
            Ok(s) => s.clone(),
            Err(e) => {
                log::error!("Failed to read shared state: {}", e);
                continue;
            }
        };

        if !run_chain(&mut middleware, &action, &current_state, &dispatcher) {
            continue;
        }

        if result_tx.send(action).is_err() {
            log::error!("Result channel disconnected, shutting down");
            break;
        }
    }

    // Dropping the chain stops every timer the middleware owns
    drop(middleware);
    log::info!("Background worker stopped");
}

/// Run an action through the chain; `false` when a middleware consumed it
pub(crate) fn run_chain(
    middleware: &mut [Box<dyn Middleware>],
    action: &Action,
    state: &AppState,
    dispatcher: &Dispatcher,
) -> bool {
    for mw in middleware.iter_mut() {
        if !mw.handle(action, state, dispatcher) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::PortfolioAction;
    use std::sync::mpsc;

    struct Consume;

    impl Middleware for Consume {
        fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
            !matches!(action, Action::Portfolio(PortfolioAction::OpenSelected))
        }
    }

    #[test]
    fn test_worker_forwards_unconsumed_actions_and_stops_on_quit() {
        let (action_tx, action_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();
        let state: SharedState = Arc::new(RwLock::new(AppState::default()));

        let middleware: Vec<Box<dyn Middleware>> = vec![Box::new(Consume)];
        let worker =
            spawn_background_worker(action_rx, action_tx.clone(), result_tx, state, middleware);

        action_tx
            .send(Action::Portfolio(PortfolioAction::OpenSelected))
            .unwrap();
        action_tx
            .send(Action::Portfolio(PortfolioAction::SelectNext))
            .unwrap();
        action_tx.send(Action::Global(GlobalAction::Quit)).unwrap();
        worker.join().unwrap();

        let forwarded: Vec<Action> = result_rx.try_iter().collect();
        assert_eq!(forwarded.len(), 2);
        assert!(matches!(
            forwarded[0],
            Action::Portfolio(PortfolioAction::SelectNext)
        ));
        assert!(matches!(forwarded[1], Action::Global(GlobalAction::Quit)));
    }
}

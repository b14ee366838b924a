use anyhow::{anyhow, Context, Result};
use gh_client::{OctocrabClient, PinnedReposHttpClient};
use gh_folio_config::AppConfig;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::time::Duration;

mod actions;
mod background;
mod capabilities;
mod dispatcher;
mod domain_models;
mod feed;
mod logger;
mod middleware;
mod reducers;
mod splash;
mod state;
mod utils;
mod view_models;
mod views;

use actions::{Action, BootstrapAction, GlobalAction};
use background::{spawn_background_worker, SharedState};
use feed::{FeedLoader, FeedRequest};
use middleware::{
    BrowserMiddleware, FeedMiddleware, KeyboardMiddleware, LoggingMiddleware, Middleware,
    SplashMiddleware,
};
use state::AppState;

/// How long the main loop waits for input before checking for results
const POLL_INTERVAL: Duration = Duration::from_millis(16);

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting gh-folio (logging to {})", log_file.display());

    let config = AppConfig::load();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    let loader = {
        // The octocrab client must be built inside the runtime
        let _guard = runtime.enter();
        let github = OctocrabClient::anonymous()?;
        let pinned = PinnedReposHttpClient::new(&config.feed.pinned_endpoint)?;
        FeedLoader::new(Arc::new(github), Arc::new(pinned))
    };

    let middleware: Vec<Box<dyn Middleware>> = vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(SplashMiddleware::new(runtime.handle().clone(), &config.splash)),
        Box::new(FeedMiddleware::new(
            runtime.handle().clone(),
            loader,
            FeedRequest::from_config(&config),
        )),
        Box::new(BrowserMiddleware::new(runtime.handle().clone())),
    ];

    let state: SharedState = Arc::new(RwLock::new(AppState::new(config)));
    let (action_tx, action_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();

    let worker = spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        Arc::clone(&state),
        middleware,
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = action_tx
        .send(Action::Bootstrap(BootstrapAction::Start))
        .map_err(|e| anyhow!("Failed to start bootstrap: {}", e))
        .and_then(|()| run_app(&mut terminal, &state, &action_tx, &result_rx));

    // Restore terminal before anything is reported
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Stop the worker (a no-op if it already saw Quit); it drops the
    // middleware and with it every timer
    let _ = action_tx.send(Action::Global(GlobalAction::Quit));
    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }
    runtime.shutdown_timeout(Duration::from_millis(200));

    log::info!("Exiting gh-folio");
    result
}

fn run_app(
    terminal: &mut Tui,
    state: &SharedState,
    action_tx: &Sender<Action>,
    result_rx: &Receiver<Action>,
) -> Result<()> {
    loop {
        {
            let current = state
                .read()
                .map_err(|_| anyhow!("Application state lock poisoned"))?;
            if !current.running {
                return Ok(());
            }
            terminal.draw(|frame| views::render(&current, frame.area(), frame))?;
        }

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    action_tx
                        .send(Action::Global(GlobalAction::KeyPressed(key)))
                        .map_err(|e| anyhow!("Background worker stopped: {}", e))?;
                }
            }
        }

        let pending: Vec<Action> = result_rx.try_iter().collect();
        if pending.is_empty() {
            continue;
        }

        let mut current = state
            .write()
            .map_err(|_| anyhow!("Application state lock poisoned"))?;
        for action in &pending {
            *current = reducers::app_reducer::reduce(current.clone(), action);
        }
    }
}

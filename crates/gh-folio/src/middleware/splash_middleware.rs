//! SplashMiddleware - owns the splash sequencer and the rain animation
//!
//! - `Bootstrap::Start` mounts the splash.
//! - `Splash::Mount` tears down any running sequencer and starts a new one.
//!   Once the portfolio has taken over, mounts are ignored.
//! - `Splash::Skip` tears down and hands off immediately.
//! - `Bootstrap::End` is the handoff. It passes through once; any later one
//!   is consumed so the host is notified exactly once.

use crate::actions::{Action, BootstrapAction, SplashAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::SplashEvent;
use crate::middleware::Middleware;
use crate::splash::{RainLoop, SplashHandle, SplashSequencer, SplashTimings};
use crate::state::AppState;
use gh_folio_config::SplashConfig;
use std::time::Duration;
use tokio::runtime::Handle;

#[derive(Debug, Clone, Copy)]
struct RainSettings {
    enabled: bool,
    drops: usize,
    frame_interval: Duration,
}

pub struct SplashMiddleware {
    runtime: Handle,
    timings: SplashTimings,
    line_count: usize,
    rain: RainSettings,
    /// Generation of the most recently started sequencer
    generation: u64,
    sequencer: Option<SplashHandle>,
    rain_loop: Option<RainLoop>,
    handed_off: bool,
}

impl SplashMiddleware {
    pub fn new(runtime: Handle, config: &SplashConfig) -> Self {
        Self {
            runtime,
            timings: SplashTimings::from_config(config),
            line_count: config.boot_lines.len(),
            rain: RainSettings {
                enabled: config.rain,
                drops: config.rain_drops,
                frame_interval: Duration::from_millis(config.rain_frame_ms),
            },
            generation: 0,
            sequencer: None,
            rain_loop: None,
            handed_off: false,
        }
    }

    fn mount(&mut self, dispatcher: &Dispatcher) {
        self.stop();

        self.generation += 1;
        let generation = self.generation;
        log::info!("SplashMiddleware: mounting splash (generation {})", generation);

        // Queued ahead of any progress from the new sequencer
        dispatcher.dispatch(Action::Splash(SplashAction::Started { generation }));

        let progress = dispatcher.clone();
        let handoff = dispatcher.clone();
        self.sequencer = Some(SplashSequencer::start(
            &self.runtime,
            &self.timings,
            self.line_count,
            move |event| progress.dispatch(Action::Splash(progress_action(generation, event))),
            move || handoff.dispatch(Action::Bootstrap(BootstrapAction::End)),
        ));

        if self.rain.enabled {
            let frames = dispatcher.clone();
            self.rain_loop = Some(RainLoop::start(
                &self.runtime,
                self.rain.drops,
                self.rain.frame_interval,
                move |field| frames.dispatch(Action::Splash(SplashAction::RainFrame(field))),
            ));
        }
    }

    /// Tear down the sequencer and stop the rain
    fn stop(&mut self) {
        if let Some(sequencer) = self.sequencer.take() {
            sequencer.teardown();
        }
        if let Some(rain) = self.rain_loop.take() {
            rain.stop();
        }
    }
}

fn progress_action(generation: u64, event: SplashEvent) -> SplashAction {
    match event {
        SplashEvent::LineRevealed(index) => SplashAction::LineRevealed { generation, index },
        SplashEvent::RevealComplete => SplashAction::ExitStarted { generation },
        SplashEvent::FadeComplete => SplashAction::Finished { generation },
    }
}

impl Middleware for SplashMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) => {
                dispatcher.dispatch(Action::Splash(SplashAction::Mount));
                true
            }
            Action::Splash(SplashAction::Mount) => {
                if self.handed_off {
                    log::debug!("SplashMiddleware: ignoring mount after handoff");
                } else {
                    self.mount(dispatcher);
                }
                false
            }
            Action::Splash(SplashAction::Skip) => {
                if self.handed_off {
                    return false;
                }
                log::info!("SplashMiddleware: splash skipped");
                self.stop();
                dispatcher.dispatch(Action::Bootstrap(BootstrapAction::End));
                true
            }
            Action::Bootstrap(BootstrapAction::End) => {
                if self.handed_off {
                    log::debug!("SplashMiddleware: dropping duplicate handoff");
                    return false;
                }
                self.handed_off = true;
                self.stop();
                true
            }
            _ => true,
        }
    }
}

impl Drop for SplashMiddleware {
    fn drop(&mut self) {
        self.stop();
    }
}

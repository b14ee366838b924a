//! Splash sequencer
//!
//! Drives `SplashPhase` from a precomputed schedule of timer steps and hands
//! control back to the host through a completion callback.
//!
//! The completion callback lives in a take-once slot shared by the driver task
//! and the `SplashHandle`. Finishing takes it out and calls it, tearing down
//! takes it out and drops it. Whichever happens first wins, so the callback
//! fires at most once and never after `teardown` has returned.

use crate::domain_models::SplashEvent;
use gh_folio_config::{SplashConfig, SplashMode};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// How the splash decides that it has played long enough
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPolicy {
    /// Reveal one line per `line_interval`, then wait `settle`
    BootLog {
        line_interval: Duration,
        settle: Duration,
    },
    /// Wait `total`, revealing nothing
    Fixed { total: Duration },
}

/// Splash timing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashTimings {
    pub policy: RevealPolicy,
    /// Length of the fade-out once the reveal is complete
    pub fade: Duration,
}

/// One timer step: wait `delay` after the previous step, then emit `event`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledStep {
    pub delay: Duration,
    pub event: SplashEvent,
}

impl SplashTimings {
    pub fn from_config(config: &SplashConfig) -> Self {
        let policy = match config.mode {
            SplashMode::BootLog => RevealPolicy::BootLog {
                line_interval: Duration::from_millis(config.line_interval_ms),
                settle: Duration::from_millis(config.settle_ms),
            },
            SplashMode::Timed => RevealPolicy::Fixed {
                total: Duration::from_millis(config.total_ms),
            },
        };

        Self {
            policy,
            fade: Duration::from_millis(config.fade_ms),
        }
    }

    /// The full schedule for a boot message of `line_count` lines
    pub fn plan(&self, line_count: usize) -> Vec<ScheduledStep> {
        let mut steps = Vec::with_capacity(line_count + 2);

        match self.policy {
            RevealPolicy::BootLog {
                line_interval,
                settle,
            } => {
                steps.extend((0..line_count).map(|index| ScheduledStep {
                    delay: line_interval,
                    event: SplashEvent::LineRevealed(index),
                }));
                steps.push(ScheduledStep {
                    delay: settle,
                    event: SplashEvent::RevealComplete,
                });
            }
            RevealPolicy::Fixed { total } => steps.push(ScheduledStep {
                delay: total,
                event: SplashEvent::RevealComplete,
            }),
        }

        steps.push(ScheduledStep {
            delay: self.fade,
            event: SplashEvent::FadeComplete,
        });
        steps
    }

    /// Earliest time after start at which the sequencer can finish
    pub fn total(&self, line_count: usize) -> Duration {
        self.plan(line_count).iter().map(|step| step.delay).sum()
    }
}

type Completion = Box<dyn FnOnce() + Send>;
type CompletionSlot = Arc<Mutex<Option<Completion>>>;

fn take_completion(slot: &CompletionSlot) -> Option<Completion> {
    slot.lock().unwrap_or_else(PoisonError::into_inner).take()
}

fn is_armed(slot: &CompletionSlot) -> bool {
    slot.lock().unwrap_or_else(PoisonError::into_inner).is_some()
}

/// Spawns splash drivers
pub struct SplashSequencer;

impl SplashSequencer {
    /// Start playing on `runtime`
    ///
    /// `on_event` is called for every timer step in order; `on_finish` is
    /// called once after the final step unless the returned handle is torn
    /// down (or dropped) first.
    pub fn start<E, F>(
        runtime: &Handle,
        timings: &SplashTimings,
        line_count: usize,
        on_event: E,
        on_finish: F,
    ) -> SplashHandle
    where
        E: Fn(SplashEvent) + Send + 'static,
        F: FnOnce() + Send + 'static,
    {
        let on_finish: Completion = Box::new(on_finish);
        let completion: CompletionSlot = Arc::new(Mutex::new(Some(on_finish)));
        let slot = Arc::clone(&completion);
        let steps = timings.plan(line_count);

        log::debug!(
            "SplashSequencer: starting {} steps ({:?} total)",
            steps.len(),
            timings.total(line_count)
        );

        let task = runtime.spawn(async move {
            for step in steps {
                tokio::time::sleep(step.delay).await;
                if !is_armed(&slot) {
                    return;
                }
                on_event(step.event);
            }

            if let Some(finish) = take_completion(&slot) {
                log::debug!("SplashSequencer: finished");
                finish();
            }
        });

        SplashHandle { completion, task }
    }
}

/// Owner of a running splash driver
///
/// Dropping the handle tears the driver down.
pub struct SplashHandle {
    completion: CompletionSlot,
    task: JoinHandle<()>,
}

impl SplashHandle {
    /// Cancel all pending timers; the completion callback will not fire
    /// after this returns. Safe to call more than once.
    pub fn teardown(&self) {
        if take_completion(&self.completion).is_some() {
            log::debug!("SplashSequencer: torn down before completion");
        }
        self.task.abort();
    }

    /// Whether the completion callback is still pending
    pub fn is_pending(&self) -> bool {
        is_armed(&self.completion)
    }
}

impl Drop for SplashHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for SplashHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplashHandle")
            .field("pending", &self.is_pending())
            .finish()
    }
}

//! Splash screen actions
//!
//! Sequencer progress carries the generation of the sequencer that produced
//! it, so progress from a torn-down sequencer can be told apart from the
//! current one.

use crate::splash::RainField;

/// Actions for the Splash screen
#[derive(Debug, Clone)]
pub enum SplashAction {
    /// Request to (re)start the splash sequence
    Mount,
    /// A sequencer with this generation has started
    Started { generation: u64 },
    /// Boot line `index` became visible
    LineRevealed { generation: u64, index: usize },
    /// All lines are visible, fade-out begins
    ExitStarted { generation: u64 },
    /// Fade-out finished
    Finished { generation: u64 },
    /// User asked to skip the splash
    Skip,
    /// New rain animation frame
    RainFrame(RainField),
}

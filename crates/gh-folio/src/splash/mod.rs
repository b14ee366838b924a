//! Splash playback: the timer-driven sequencer and the rain animation

mod rain;
mod sequencer;

pub use rain::{RainField, RainLoop};
pub use sequencer::{SplashHandle, SplashSequencer, SplashTimings};

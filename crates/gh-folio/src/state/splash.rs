//! Splash Screen State

use crate::domain_models::{BootMessage, SplashPhase};
use crate::splash::RainField;
use gh_folio_config::SplashConfig;

/// Splash screen state
#[derive(Debug, Clone)]
pub struct SplashState {
    /// Generation of the sequencer whose progress is shown; 0 before mount
    pub generation: u64,
    pub phase: SplashPhase,
    pub boot_message: BootMessage,
    /// Number of boot lines currently visible
    pub revealed: usize,
    /// Latest rain frame, if the animation is running
    pub rain: Option<RainField>,
}

impl SplashState {
    pub fn new(config: &SplashConfig) -> Self {
        Self {
            generation: 0,
            phase: SplashPhase::default(),
            boot_message: BootMessage::new(config.boot_lines.iter().cloned()),
            revealed: 0,
            rain: None,
        }
    }

    /// Boot lines visible right now
    pub fn visible_lines(&self) -> &[String] {
        self.boot_message.revealed(self.revealed)
    }

    pub fn is_fading(&self) -> bool {
        self.phase == SplashPhase::Exiting
    }
}

impl Default for SplashState {
    fn default() -> Self {
        Self::new(&SplashConfig::default())
    }
}

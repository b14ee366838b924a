//! Splash phase state machine
//!
//! `Playing -> Exiting -> Done`, forward only. `Done` is terminal.

/// Presentation phase of the splash screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SplashPhase {
    /// Boot lines are being revealed (or the fixed timer is running)
    #[default]
    Playing,
    /// Fade-out in progress
    Exiting,
    /// Finished; the host has been handed control
    Done,
}

/// Timer events that drive the splash phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashEvent {
    /// Boot line with the given index became visible
    LineRevealed(usize),
    /// All lines shown and the settle delay (or fixed duration) elapsed
    RevealComplete,
    /// The fade-out finished
    FadeComplete,
}

impl SplashPhase {
    /// Pure transition function
    ///
    /// Events that do not apply to the current phase leave it unchanged,
    /// so late or duplicated timer firings are harmless.
    pub fn advance(self, event: SplashEvent) -> SplashPhase {
        match (self, event) {
            (SplashPhase::Playing, SplashEvent::RevealComplete) => SplashPhase::Exiting,
            (SplashPhase::Exiting, SplashEvent::FadeComplete) => SplashPhase::Done,
            (phase, _) => phase,
        }
    }

    pub fn is_done(self) -> bool {
        self == SplashPhase::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_path() {
        let phase = SplashPhase::default()
            .advance(SplashEvent::LineRevealed(0))
            .advance(SplashEvent::LineRevealed(1));
        assert_eq!(phase, SplashPhase::Playing);

        let phase = phase.advance(SplashEvent::RevealComplete);
        assert_eq!(phase, SplashPhase::Exiting);

        let phase = phase.advance(SplashEvent::FadeComplete);
        assert!(phase.is_done());
    }

    #[test]
    fn test_no_skipping_exiting() {
        let phase = SplashPhase::Playing.advance(SplashEvent::FadeComplete);
        assert_eq!(phase, SplashPhase::Playing);
    }

    #[test]
    fn test_done_is_terminal() {
        for event in [
            SplashEvent::LineRevealed(3),
            SplashEvent::RevealComplete,
            SplashEvent::FadeComplete,
        ] {
            assert_eq!(SplashPhase::Done.advance(event), SplashPhase::Done);
        }
    }

    #[test]
    fn test_lines_do_not_move_exiting_backwards() {
        let phase = SplashPhase::Exiting.advance(SplashEvent::LineRevealed(0));
        assert_eq!(phase, SplashPhase::Exiting);
        let phase = SplashPhase::Exiting.advance(SplashEvent::RevealComplete);
        assert_eq!(phase, SplashPhase::Exiting);
    }
}

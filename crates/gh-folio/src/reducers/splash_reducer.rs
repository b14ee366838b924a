use crate::actions::{Action, BootstrapAction, SplashAction};
use crate::domain_models::{SplashEvent, SplashPhase};
use crate::state::SplashState;

/// Reducer for splash screen state
///
/// Progress tagged with a generation other than the current one comes from
/// a torn-down sequencer and is ignored.
pub fn reduce(mut state: SplashState, action: &Action) -> SplashState {
    match action {
        Action::Splash(SplashAction::Started { generation }) => {
            state.generation = *generation;
            state.phase = SplashPhase::Playing;
            state.revealed = 0;
        }
        Action::Splash(SplashAction::LineRevealed { generation, index })
            if *generation == state.generation =>
        {
            if state.phase == SplashPhase::Playing {
                state.revealed = state.revealed.max(index + 1).min(state.boot_message.len());
            }
            state.phase = state.phase.advance(SplashEvent::LineRevealed(*index));
        }
        Action::Splash(SplashAction::ExitStarted { generation })
            if *generation == state.generation =>
        {
            // Everything is visible while fading out
            if state.phase == SplashPhase::Playing {
                state.revealed = state.boot_message.len();
            }
            state.phase = state.phase.advance(SplashEvent::RevealComplete);
        }
        Action::Splash(SplashAction::Finished { generation })
            if *generation == state.generation =>
        {
            state.phase = state.phase.advance(SplashEvent::FadeComplete);
        }
        Action::Splash(SplashAction::RainFrame(field)) if !state.phase.is_done() => {
            state.rain = Some(field.clone());
        }
        Action::Splash(SplashAction::Skip) | Action::Bootstrap(BootstrapAction::End) => {
            state.phase = SplashPhase::Done;
            state.rain = None;
        }
        _ => {
            // Unhandled actions - no state change
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splash::RainField;
    use gh_folio_config::SplashConfig;

    fn state_with_lines(count: usize) -> SplashState {
        let config = SplashConfig {
            boot_lines: (0..count).map(|i| format!("line {i}")).collect(),
            ..SplashConfig::default()
        };
        reduce(
            SplashState::new(&config),
            &Action::Splash(SplashAction::Started { generation: 1 }),
        )
    }

    fn line(generation: u64, index: usize) -> Action {
        Action::Splash(SplashAction::LineRevealed { generation, index })
    }

    #[test]
    fn test_full_sequence() {
        let mut state = state_with_lines(3);
        for index in 0..3 {
            state = reduce(state, &line(1, index));
        }
        assert_eq!(state.visible_lines().len(), 3);
        assert_eq!(state.phase, SplashPhase::Playing);

        state = reduce(state, &Action::Splash(SplashAction::ExitStarted { generation: 1 }));
        assert!(state.is_fading());

        state = reduce(state, &Action::Splash(SplashAction::Finished { generation: 1 }));
        assert!(state.phase.is_done());
    }

    #[test]
    fn test_stale_generation_is_ignored() {
        let state = state_with_lines(3);
        let state = reduce(state, &Action::Splash(SplashAction::Started { generation: 2 }));
        let state = reduce(state, &line(1, 2));
        let state = reduce(state, &Action::Splash(SplashAction::ExitStarted { generation: 1 }));

        assert_eq!(state.revealed, 0);
        assert_eq!(state.phase, SplashPhase::Playing);
    }

    #[test]
    fn test_reveal_is_clamped() {
        let state = reduce(state_with_lines(2), &line(1, 7));
        assert_eq!(state.revealed, 2);
    }

    #[test]
    fn test_finished_before_exit_is_ignored() {
        let state = reduce(
            state_with_lines(2),
            &Action::Splash(SplashAction::Finished { generation: 1 }),
        );
        assert_eq!(state.phase, SplashPhase::Playing);
    }

    #[test]
    fn test_skip_clears_rain_and_ignores_later_frames() {
        let state = reduce(
            state_with_lines(2),
            &Action::Splash(SplashAction::RainFrame(RainField::default())),
        );
        assert!(state.rain.is_some());

        let state = reduce(state, &Action::Splash(SplashAction::Skip));
        assert!(state.phase.is_done());
        assert!(state.rain.is_none());

        let state = reduce(
            state,
            &Action::Splash(SplashAction::RainFrame(RainField::default())),
        );
        assert!(state.rain.is_none());
    }
}

use crate::actions::{Action, FeedAction, PortfolioAction};
use crate::state::PortfolioState;

/// Reducer for the portfolio screen
///
/// `card_count` is the number of repository cards currently shown.
/// Selection wraps around at both ends.
pub fn reduce(mut state: PortfolioState, action: &Action, card_count: usize) -> PortfolioState {
    match action {
        Action::Portfolio(PortfolioAction::SelectNext) if card_count > 0 => {
            state.selected = (state.selected + 1) % card_count;
        }
        Action::Portfolio(PortfolioAction::SelectPrevious) if card_count > 0 => {
            state.selected = if state.selected == 0 {
                card_count - 1
            } else {
                state.selected - 1
            };
        }
        Action::Feed(FeedAction::Loaded(_)) => {
            state.selected = 0;
        }
        _ => {}
    }

    if card_count > 0 && state.selected >= card_count {
        state.selected = card_count - 1;
    }

    state
}

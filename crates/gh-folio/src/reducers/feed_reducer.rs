use crate::actions::{Action, FeedAction};
use crate::domain_models::FeedState;

/// Reducer for the repository feed
///
/// The feed settles once; `FeedState` ignores later results.
pub fn reduce(state: FeedState, action: &Action) -> FeedState {
    match action {
        Action::Feed(FeedAction::Loaded(repos)) => state.ready(repos.clone()),
        Action::Feed(FeedAction::Failed(error)) => state.fail(error.clone()),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::RepoSummary;
    use crate::feed::FeedError;
    use std::sync::Arc;

    fn repos(names: &[&str]) -> Arc<[RepoSummary]> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| RepoSummary {
                id: i as u64,
                name: name.to_string(),
                owner: "c137v8".to_string(),
                description: "desc".to_string(),
                stars: 0,
                pushed_at: None,
                url: format!("https://github.com/c137v8/{name}"),
                preview_image: None,
            })
            .collect()
    }

    #[test]
    fn test_loaded_settles_ready() {
        let state = reduce(FeedState::Loading, &Action::Feed(FeedAction::LoadStarted));
        assert!(state.is_loading());

        let state = reduce(state, &Action::Feed(FeedAction::Loaded(repos(&["a", "b"]))));
        assert_eq!(state.repositories().len(), 2);
    }

    #[test]
    fn test_failure_after_ready_is_ignored() {
        let state = reduce(
            FeedState::Loading,
            &Action::Feed(FeedAction::Loaded(repos(&["a"]))),
        );
        let state = reduce(
            state,
            &Action::Feed(FeedAction::Failed(FeedError::ListRepositories {
                account: "c137v8".to_string(),
                reason: "HTTP 500".to_string(),
            })),
        );
        assert_eq!(state.repositories()[0].name, "a");
    }
}

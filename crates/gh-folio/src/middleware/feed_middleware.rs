//! FeedMiddleware - runs the repository feed load
//!
//! `Bootstrap::Start` requests the load. The first `Feed::LoadStarted` spawns
//! it on the runtime; the result comes back as `Feed::Loaded` or
//! `Feed::Failed`. The feed is loaded once per run.

use crate::actions::{Action, BootstrapAction, FeedAction};
use crate::dispatcher::Dispatcher;
use crate::feed::{FeedLoader, FeedRequest};
use crate::middleware::Middleware;
use crate::state::AppState;
use tokio::runtime::Handle;

pub struct FeedMiddleware {
    runtime: Handle,
    loader: FeedLoader,
    request: FeedRequest,
    started: bool,
}

impl FeedMiddleware {
    pub fn new(runtime: Handle, loader: FeedLoader, request: FeedRequest) -> Self {
        Self {
            runtime,
            loader,
            request,
            started: false,
        }
    }

    fn start_load(&mut self, dispatcher: &Dispatcher) {
        self.started = true;

        let loader = self.loader.clone();
        let request = self.request.clone();
        let dispatcher = dispatcher.clone();
        log::info!(
            "FeedMiddleware: loading {:?} feed for {}",
            request.source,
            request.account
        );

        self.runtime.spawn(async move {
            match loader.fetch(&request).await {
                Ok(repos) => {
                    log::info!("FeedMiddleware: loaded {} repositories", repos.len());
                    dispatcher.dispatch(Action::Feed(FeedAction::Loaded(repos.into())));
                }
                Err(e) => {
                    log::warn!("FeedMiddleware: {}", e);
                    dispatcher.dispatch(Action::Feed(FeedAction::Failed(e)));
                }
            }
        });
    }
}

impl Middleware for FeedMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) => {
                dispatcher.dispatch(Action::Feed(FeedAction::LoadStarted));
                true
            }
            Action::Feed(FeedAction::LoadStarted) => {
                if self.started {
                    log::debug!("FeedMiddleware: feed already requested");
                    return false;
                }
                self.start_load(dispatcher);
                true
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FeedError;
    use async_trait::async_trait;
    use gh_client::{
        ContentEntry, GitHubClient, PinnedReposClient, PinnedRepository, RepoListQuery,
        Repository, RepositoryOwner,
    };
    use gh_folio_config::AppConfig;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;
    use std::sync::Arc;
    use std::time::Duration;

    struct StubGitHub {
        fail: bool,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl GitHubClient for StubGitHub {
        async fn list_user_repositories(
            &self,
            owner: &str,
            _query: &RepoListQuery,
        ) -> anyhow::Result<Vec<Repository>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("HTTP 500");
            }
            Ok(vec![Repository {
                id: 1,
                name: "folio".to_string(),
                owner: RepositoryOwner {
                    login: owner.to_string(),
                },
                description: Some("terminal portfolio".to_string()),
                stargazers_count: 3,
                pushed_at: None,
                html_url: None,
            }])
        }

        async fn list_repository_contents(
            &self,
            _owner: &str,
            _repo: &str,
        ) -> anyhow::Result<Vec<ContentEntry>> {
            Ok(Vec::new())
        }
    }

    struct NoPinned;

    #[async_trait]
    impl PinnedReposClient for NoPinned {
        async fn fetch_pinned(&self, _username: &str) -> anyhow::Result<Vec<PinnedRepository>> {
            Ok(Vec::new())
        }
    }

    async fn run(fail: bool, requests: usize) -> (Vec<Action>, usize) {
        let github = Arc::new(StubGitHub {
            fail,
            calls: AtomicUsize::new(0),
        });
        let loader = FeedLoader::new(github.clone(), Arc::new(NoPinned));
        let mut mw = FeedMiddleware::new(
            Handle::current(),
            loader,
            FeedRequest::from_config(&AppConfig::default()),
        );

        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let state = AppState::default();
        for _ in 0..requests {
            mw.handle(&Action::Feed(FeedAction::LoadStarted), &state, &dispatcher);
        }

        tokio::time::sleep(Duration::from_millis(50)).await;
        (rx.try_iter().collect(), github.calls.load(Ordering::SeqCst))
    }

    #[tokio::test]
    async fn test_load_dispatches_loaded_once() {
        let (actions, calls) = run(false, 3).await;
        assert_eq!(calls, 1);
        assert_eq!(actions.len(), 1);
        match &actions[0] {
            Action::Feed(FeedAction::Loaded(repos)) => {
                assert_eq!(repos.len(), 1);
                assert_eq!(repos[0].url, "https://github.com/c137v8/folio");
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failure_dispatches_failed() {
        let (actions, _) = run(true, 1).await;
        match &actions[..] {
            [Action::Feed(FeedAction::Failed(FeedError::ListRepositories { account, reason }))] => {
                assert_eq!(account, "c137v8");
                assert!(reason.contains("HTTP 500"));
            }
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_bootstrap_requests_load() {
        let (tx, rx) = mpsc::channel();
        let mut mw = FeedMiddleware::new(
            Handle::current(),
            FeedLoader::new(
                Arc::new(StubGitHub {
                    fail: false,
                    calls: AtomicUsize::new(0),
                }),
                Arc::new(NoPinned),
            ),
            FeedRequest::from_config(&AppConfig::default()),
        );
        assert!(mw.handle(
            &Action::Bootstrap(BootstrapAction::Start),
            &AppState::default(),
            &Dispatcher::new(tx),
        ));
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Feed(FeedAction::LoadStarted))
        ));
    }
}

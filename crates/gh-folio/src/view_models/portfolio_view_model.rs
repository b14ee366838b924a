//! Portfolio view model
//!
//! Turns the profile config and the feed state into ready-to-render text.

use crate::domain_models::{FeedState, RepoSummary};
use crate::state::AppState;
use gh_folio_config::FeedSourceKind;

/// Everything the portfolio screen shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioViewModel {
    pub name: String,
    pub tagline: String,
    pub about: String,
    pub projects_heading: &'static str,
    pub projects: ProjectsSection,
    /// Skills joined into one line
    pub skills: String,
    pub contact: Vec<ContactLine>,
}

/// Content of the projects section for each feed state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectsSection {
    Loading,
    Error(String),
    Empty,
    Cards(Vec<ProjectCard>),
}

/// One repository card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    /// e.g. "★ 42"
    pub stars: String,
    /// e.g. "pushed 2024-03-01"
    pub pushed: Option<String>,
    pub has_preview: bool,
    pub url: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLine {
    pub label: String,
    pub url: String,
}

impl PortfolioViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let profile = &state.config.profile;

        Self {
            name: profile.name.clone(),
            tagline: profile.tagline.clone(),
            about: profile.about.clone(),
            projects_heading: projects_heading(state.config.feed.source),
            projects: ProjectsSection::from_feed(&state.feed, state.portfolio.selected),
            skills: profile.skills.join(" • "),
            contact: profile
                .contact
                .iter()
                .map(|link| ContactLine {
                    label: link.label.clone(),
                    url: link.url.clone(),
                })
                .collect(),
        }
    }
}

fn projects_heading(source: FeedSourceKind) -> &'static str {
    match source {
        FeedSourceKind::TopStarred => "Top Starred Repositories",
        FeedSourceKind::Recent => "Recently Pushed",
        FeedSourceKind::Pinned => "Pinned Repositories",
    }
}

impl ProjectsSection {
    pub fn from_feed(feed: &FeedState, selected: usize) -> Self {
        match feed {
            FeedState::Loading => ProjectsSection::Loading,
            FeedState::Error(error) => ProjectsSection::Error(error.to_string()),
            FeedState::Ready(repos) if repos.is_empty() => ProjectsSection::Empty,
            FeedState::Ready(repos) => ProjectsSection::Cards(
                repos
                    .iter()
                    .enumerate()
                    .map(|(index, repo)| ProjectCard::new(repo, index == selected))
                    .collect(),
            ),
        }
    }
}

impl ProjectCard {
    fn new(repo: &RepoSummary, selected: bool) -> Self {
        Self {
            title: repo.name.clone(),
            description: repo.description.trim().to_string(),
            stars: format!("★ {}", repo.stars),
            pushed: repo
                .pushed_at
                .map(|at| format!("pushed {}", at.format("%Y-%m-%d"))),
            has_preview: repo.preview_image.is_some(),
            url: repo.url.clone(),
            selected,
        }
    }
}

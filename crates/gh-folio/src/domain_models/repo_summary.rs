//! Repository summary model
//!
//! A denormalized, display-only view of one repository.

use chrono::{DateTime, Utc};
use gh_client::{PinnedRepository, Repository};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const GITHUB_WEB: &str = "https://github.com/";

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped
const PATH_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// One repository as shown on the portfolio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSummary {
    /// API id; pinned entries are numbered by position starting at 1
    pub id: u64,
    /// Display name (trimmed)
    pub name: String,
    /// Owner login
    pub owner: String,
    /// Description, empty when the repository has none
    pub description: String,
    pub stars: u64,
    pub pushed_at: Option<DateTime<Utc>>,
    /// `https://github.com/<owner>/<percent-encoded name>`
    pub url: String,
    /// Direct download URL of the first image found in the repository root
    pub preview_image: Option<String>,
}

impl RepoSummary {
    pub fn from_api(repo: &Repository) -> Self {
        let name = repo.name.trim().to_string();
        let owner = repo.owner.login.clone();

        Self {
            id: repo.id,
            url: canonical_url(&owner, &name),
            description: repo.description.clone().unwrap_or_default(),
            stars: repo.stargazers_count,
            pushed_at: repo.pushed_at,
            preview_image: None,
            name,
            owner,
        }
    }

    /// Build from a pinned entry; `fallback_owner` is used when the endpoint
    /// does not report one
    pub fn from_pinned(position: usize, pinned: &PinnedRepository, fallback_owner: &str) -> Self {
        let name = pinned.repo.trim().to_string();
        let owner = pinned
            .owner
            .clone()
            .filter(|owner| !owner.trim().is_empty())
            .unwrap_or_else(|| fallback_owner.to_string());

        Self {
            id: position as u64 + 1,
            url: canonical_url(&owner, &name),
            description: pinned.description.clone().unwrap_or_default(),
            stars: pinned.stars,
            pushed_at: None,
            preview_image: None,
            name,
            owner,
        }
    }

    /// A repository is presentable when it has a non-blank description
    pub fn is_presentable(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

/// Canonical web URL of a repository
///
/// Owner and name are each escaped as a full URI component, so reserved
/// characters such as `&`, `=` or `/` never change the path structure.
pub fn canonical_url(owner: &str, name: &str) -> String {
    format!(
        "{}{}/{}",
        GITHUB_WEB,
        utf8_percent_encode(owner, PATH_COMPONENT),
        utf8_percent_encode(name, PATH_COMPONENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gh_client::RepositoryOwner;

    fn api_repo(name: &str, description: Option<&str>) -> Repository {
        Repository {
            id: 9,
            name: name.to_string(),
            owner: RepositoryOwner {
                login: "c137v8".to_string(),
            },
            description: description.map(String::from),
            stargazers_count: 4,
            pushed_at: None,
            html_url: None,
        }
    }

    #[test]
    fn test_canonical_url() {
        assert_eq!(
            canonical_url("c137v8", "purple-rain"),
            "https://github.com/c137v8/purple-rain"
        );
        assert_eq!(
            canonical_url("c137v8", "my repo#1"),
            "https://github.com/c137v8/my%20repo%231"
        );
        // Reserved characters are escaped too
        assert_eq!(
            canonical_url("c137v8", "a&b=c+d;e:f@g,h$i"),
            "https://github.com/c137v8/a%26b%3Dc%2Bd%3Be%3Af%40g%2Ch%24i"
        );
        assert_eq!(
            canonical_url("c137v8", "x/y"),
            "https://github.com/c137v8/x%2Fy"
        );
        // Unreserved marks stay as they are
        assert_eq!(
            canonical_url("c137v8", "it's(fine)!~*"),
            "https://github.com/c137v8/it's(fine)!~*"
        );
    }

    #[test]
    fn test_from_api_trims_name() {
        let summary = RepoSummary::from_api(&api_repo("  folio ", Some("site")));
        assert_eq!(summary.name, "folio");
        assert_eq!(summary.url, "https://github.com/c137v8/folio");
        assert_eq!(summary.stars, 4);
        assert!(summary.preview_image.is_none());
    }

    #[test]
    fn test_presentable() {
        assert!(RepoSummary::from_api(&api_repo("a", Some("x"))).is_presentable());
        assert!(!RepoSummary::from_api(&api_repo("a", Some(" \t\n"))).is_presentable());
        assert!(!RepoSummary::from_api(&api_repo("a", None)).is_presentable());
    }

    #[test]
    fn test_from_pinned_owner_fallback() {
        let pinned = PinnedRepository {
            owner: None,
            repo: "rain".to_string(),
            description: Some("drops".to_string()),
            link: None,
            stars: 7,
        };
        let summary = RepoSummary::from_pinned(2, &pinned, "c137v8");
        assert_eq!(summary.id, 3);
        assert_eq!(summary.owner, "c137v8");
        assert_eq!(summary.url, "https://github.com/c137v8/rain");
        assert!(summary.pushed_at.is_none());
    }
}

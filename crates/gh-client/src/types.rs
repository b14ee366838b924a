//! GitHub API data transfer objects
//!
//! These types represent the data returned from the GitHub API and the
//! pinned repositories endpoint. They are intentionally separate from
//! application domain models to keep this crate pure and reusable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A repository as returned by `GET /users/{owner}/repos`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Numeric repository id
    pub id: u64,

    /// Repository name (e.g., "gh-folio")
    pub name: String,

    /// Owning account
    pub owner: RepositoryOwner,

    /// Repository description (null when unset)
    pub description: Option<String>,

    /// Number of stargazers
    #[serde(default)]
    pub stargazers_count: u64,

    /// When the repository last received a push (null for empty repositories)
    pub pushed_at: Option<DateTime<Utc>>,

    /// Web URL as reported by the API
    pub html_url: Option<String>,
}

/// Owner of a repository
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryOwner {
    /// Account login (e.g., "octocat")
    pub login: String,
}

/// One entry of `GET /repos/{owner}/{repo}/contents`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEntry {
    /// File or directory name
    pub name: String,

    /// Entry kind
    #[serde(rename = "type")]
    pub entry_type: ContentType,

    /// Raw download URL (null for directories and submodules)
    pub download_url: Option<String>,
}

/// Kind of a repository content entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    File,
    Dir,
    Symlink,
    Submodule,
    #[serde(other)]
    Unknown,
}

/// A repository pinned on a user's profile, as returned by the
/// pinned repositories endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinnedRepository {
    /// Owning account, when the endpoint reports it
    #[serde(default)]
    pub owner: Option<String>,

    /// Repository name
    pub repo: String,

    /// Repository description
    #[serde(default)]
    pub description: Option<String>,

    /// Web URL of the repository
    #[serde(default)]
    pub link: Option<String>,

    /// Star count; the endpoint reports either a number or an abbreviated
    /// string such as "1.2k"
    #[serde(default, deserialize_with = "deserialize_star_count")]
    pub stars: u64,
}

/// Sort key for repository listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepoSort {
    Stars,
    Pushed,
    Updated,
    Created,
    FullName,
}

/// Sort direction for repository listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Query parameters for `GET /users/{owner}/repos`
///
/// Unset parameters are omitted from the request so the API defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepoListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<RepoSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u8>,
}

impl RepoListQuery {
    pub fn sort(mut self, sort: RepoSort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn direction(mut self, direction: SortDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn per_page(mut self, per_page: u8) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

fn deserialize_star_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_u64().unwrap_or(0),
        serde_json::Value::String(s) => parse_abbreviated_count(&s).unwrap_or(0),
        _ => 0,
    })
}

/// Parse counts like "42", "1,204", "1.2k" or "3m"
fn parse_abbreviated_count(raw: &str) -> Option<u64> {
    let trimmed = raw.trim().replace(',', "").to_lowercase();
    let (number, multiplier) = match trimmed.chars().last()? {
        'k' => (&trimmed[..trimmed.len() - 1], 1_000.0),
        'm' => (&trimmed[..trimmed.len() - 1], 1_000_000.0),
        _ => (trimmed.as_str(), 1.0),
    };
    let value: f64 = number.parse().ok()?;
    (value >= 0.0).then(|| (value * multiplier).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_repository_deserialize_with_nulls() {
        let json = r#"{
            "id": 42,
            "name": "rain",
            "owner": { "login": "c137v8", "id": 7 },
            "description": null,
            "stargazers_count": 3,
            "pushed_at": null,
            "html_url": "https://github.com/c137v8/rain",
            "fork": false
        }"#;
        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.id, 42);
        assert_eq!(repo.owner.login, "c137v8");
        assert!(repo.description.is_none());
        assert!(repo.pushed_at.is_none());
        assert_eq!(repo.stargazers_count, 3);
    }

    #[test]
    fn test_repository_deserialize_pushed_at() {
        let json = r#"{
            "id": 1,
            "name": "folio",
            "owner": { "login": "c137v8" },
            "description": "terminal portfolio",
            "pushed_at": "2024-03-01T12:30:00Z"
        }"#;
        let repo: Repository = serde_json::from_str(json).unwrap();
        let pushed = repo.pushed_at.unwrap();
        assert_eq!(pushed.to_rfc3339(), "2024-03-01T12:30:00+00:00");
        assert_eq!(repo.stargazers_count, 0);
    }

    #[test]
    fn test_content_entry_types() {
        let json = r#"[
            { "name": "src", "type": "dir", "download_url": null },
            { "name": "logo.PNG", "type": "file", "download_url": "https://raw.example/logo.PNG" },
            { "name": "weird", "type": "something-new", "download_url": null }
        ]"#;
        let entries: Vec<ContentEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].entry_type, ContentType::Dir);
        assert_eq!(entries[1].entry_type, ContentType::File);
        assert_eq!(entries[2].entry_type, ContentType::Unknown);
    }

    #[test]
    fn test_pinned_repository_star_formats() {
        let json = r#"[
            { "owner": "c137v8", "repo": "a", "description": "x", "stars": 12 },
            { "repo": "b", "stars": "1.2k" },
            { "repo": "c", "stars": "1,204" },
            { "repo": "d" }
        ]"#;
        let pinned: Vec<PinnedRepository> = serde_json::from_str(json).unwrap();
        let stars: Vec<u64> = pinned.iter().map(|p| p.stars).collect();
        assert_eq!(stars, vec![12, 1200, 1204, 0]);
        assert_eq!(pinned[0].owner.as_deref(), Some("c137v8"));
        assert!(pinned[1].owner.is_none());
    }

    #[test]
    fn test_query_omits_unset_parameters() {
        let query = RepoListQuery::default().per_page(5);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            serde_json::json!({ "per_page": 5 })
        );

        let query = RepoListQuery::default()
            .sort(RepoSort::Stars)
            .direction(SortDirection::Desc)
            .per_page(5);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            serde_json::json!({ "sort": "stars", "direction": "desc", "per_page": 5 })
        );
    }

    #[test]
    fn test_parse_abbreviated_count() {
        assert_eq!(parse_abbreviated_count("42"), Some(42));
        assert_eq!(parse_abbreviated_count("2.5M"), Some(2_500_000));
        assert_eq!(parse_abbreviated_count(""), None);
        assert_eq!(parse_abbreviated_count("lots"), None);
    }
}

//! Application configuration
//!
//! Configuration loaded from `.gh-folio.toml`. Every field has a compiled-in
//! default, so the application runs without any file and partial files only
//! override what they name.

use gh_client::DEFAULT_PINNED_ENDPOINT;
use serde::{Deserialize, Serialize};

/// Application configuration loaded from .gh-folio.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// GitHub account whose repositories are shown
    #[serde(default = "default_account")]
    pub account: String,

    /// Repository feed settings
    #[serde(default)]
    pub feed: FeedConfig,

    /// Splash screen settings
    #[serde(default)]
    pub splash: SplashConfig,

    /// Portfolio content
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// Which data source and ordering the repository feed uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedSourceKind {
    /// Most starred repositories, as ordered by the API
    #[default]
    TopStarred,
    /// Most recently pushed repositories
    Recent,
    /// Repositories pinned on the profile (third-party endpoint)
    Pinned,
}

/// Repository feed settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub source: FeedSourceKind,
    /// Page size requested from the API
    pub per_page: u8,
    /// Number of entries kept by the recent view
    pub recent_count: usize,
    /// Look up a preview image for every repository
    pub previews: bool,
    /// Base URL of the pinned repositories endpoint
    pub pinned_endpoint: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            source: FeedSourceKind::TopStarred,
            per_page: 5,
            recent_count: 3,
            previews: false,
            pinned_endpoint: DEFAULT_PINNED_ENDPOINT.to_string(),
        }
    }
}

/// How the splash screen decides when to exit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplashMode {
    /// Reveal boot lines one by one, then settle
    #[default]
    BootLog,
    /// Wait a fixed total duration
    Timed,
}

/// Splash screen settings (all durations in milliseconds)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    pub mode: SplashMode,
    pub line_interval_ms: u64,
    pub settle_ms: u64,
    pub total_ms: u64,
    pub fade_ms: u64,
    /// Draw the rain animation behind the splash
    pub rain: bool,
    pub rain_drops: usize,
    pub rain_frame_ms: u64,
    pub title: String,
    pub boot_lines: Vec<String>,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            mode: SplashMode::BootLog,
            line_interval_ms: 180,
            settle_ms: 600,
            total_ms: 1000,
            fade_ms: 400,
            rain: true,
            rain_drops: 200,
            rain_frame_ms: 50,
            title: "its me".to_string(),
            boot_lines: default_boot_lines(),
        }
    }
}

fn default_boot_lines() -> Vec<String> {
    [
        "[    0.000000] folio: initializing portfolio kernel",
        "[    0.021337] mem: allocating 640K (should be enough for anybody)",
        "[    0.042000] net: resolving api.github.com",
        "[    0.084512] fs: mounting /projects read-only",
        "[    0.133700] gpu: purple rain shader online",
        "[    0.200001] skills: loading modules",
        "[    0.256000] contact: opening channels",
        "[    0.314159] init: handing off to userland",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// A contact entry (e.g., "GitHub" -> profile URL)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

/// Static portfolio content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub tagline: String,
    pub about: String,
    pub skills: Vec<String>,
    pub contact: Vec<ContactLink>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Welcome to My Portfolio".to_string(),
            tagline: "Full Stack Developer | Game Dev | Fitness Enthusiast".to_string(),
            about: "I build things for the web, for games and for the terminal.".to_string(),
            skills: ["JavaScript", "React", "Node.js", "Rust", "Game Development"]
                .into_iter()
                .map(String::from)
                .collect(),
            contact: vec![ContactLink {
                label: "GitHub".to_string(),
                url: format!("https://github.com/{}", default_account()),
            }],
        }
    }
}

fn default_account() -> String {
    "c137v8".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            account: default_account(),
            feed: FeedConfig::default(),
            splash: SplashConfig::default(),
            profile: ProfileConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse config from TOML content
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.account, "c137v8");
        assert_eq!(config.feed.source, FeedSourceKind::TopStarred);
        assert_eq!(config.feed.per_page, 5);
        assert_eq!(config.feed.recent_count, 3);
        assert!(!config.feed.previews);
        assert_eq!(config.feed.pinned_endpoint, DEFAULT_PINNED_ENDPOINT);
        assert_eq!(config.splash.mode, SplashMode::BootLog);
        assert!(!config.splash.boot_lines.is_empty());
        assert!(!config.profile.skills.is_empty());
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            account = "octocat"

            [feed]
            source = "recent"
            previews = true

            [splash]
            mode = "timed"
            total_ms = 2500
        "#;
        let config = AppConfig::parse(toml).unwrap();
        assert_eq!(config.account, "octocat");
        assert_eq!(config.feed.source, FeedSourceKind::Recent);
        assert!(config.feed.previews);
        // Unset fields keep their defaults
        assert_eq!(config.feed.recent_count, 3);
        assert_eq!(config.splash.mode, SplashMode::Timed);
        assert_eq!(config.splash.total_ms, 2500);
        assert_eq!(config.splash.fade_ms, 400);
        assert_eq!(config.profile, ProfileConfig::default());
    }

    #[test]
    fn test_profile_deserialize() {
        let toml = r#"
            [profile]
            name = "Ada"
            skills = ["Rust"]
            contact = [{ label = "Mail", url = "mailto:ada@example.com" }]
        "#;
        let config = AppConfig::parse(toml).unwrap();
        assert_eq!(config.profile.name, "Ada");
        assert_eq!(config.profile.skills, vec!["Rust".to_string()]);
        assert_eq!(config.profile.contact[0].label, "Mail");
        assert!(!config.profile.tagline.is_empty());
    }

    #[test]
    fn test_unknown_source_is_rejected() {
        let toml = r#"
            [feed]
            source = "trending"
        "#;
        assert!(AppConfig::parse(toml).is_err());
    }
}

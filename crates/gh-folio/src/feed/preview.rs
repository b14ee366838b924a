//! Preview image lookup
//!
//! Scans a repository's top-level files for the first image and uses its
//! raw download URL as the preview.

use crate::domain_models::RepoSummary;
use futures::future::join_all;
use gh_client::{ContentEntry, ContentType, GitHubClient};
use regex::Regex;
use std::sync::OnceLock;

fn image_file_regex() -> &'static Regex {
    static IMAGE_FILE: OnceLock<Regex> = OnceLock::new();
    IMAGE_FILE.get_or_init(|| {
        Regex::new(r"(?i)\.(png|jpe?g|gif|webp)$").expect("image file pattern is valid")
    })
}

/// Download URL of the first image file in a directory listing
pub fn find_preview_image(entries: &[ContentEntry]) -> Option<String> {
    entries
        .iter()
        .find(|entry| {
            entry.entry_type == ContentType::File && image_file_regex().is_match(&entry.name)
        })
        .and_then(|entry| entry.download_url.clone())
}

/// Look up the preview image of one repository
///
/// Lookup failures are logged and reported as "no preview".
pub async fn lookup_preview(client: &dyn GitHubClient, repo: &RepoSummary) -> Option<String> {
    match client.list_repository_contents(&repo.owner, &repo.name).await {
        Ok(entries) => find_preview_image(&entries),
        Err(e) => {
            log::warn!(
                "Preview lookup failed for {}/{}: {:#}",
                repo.owner,
                repo.name,
                e
            );
            None
        }
    }
}

/// Look up previews for all repositories concurrently
///
/// Returns once every lookup has settled. Output order follows input order,
/// and a failed lookup only affects its own repository.
pub async fn enrich_with_previews(
    client: &dyn GitHubClient,
    repos: Vec<RepoSummary>,
) -> Vec<RepoSummary> {
    let previews = join_all(repos.iter().map(|repo| lookup_preview(client, repo))).await;

    repos
        .into_iter()
        .zip(previews)
        .map(|(repo, preview_image)| RepoSummary {
            preview_image,
            ..repo
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, entry_type: ContentType) -> ContentEntry {
        ContentEntry {
            name: name.to_string(),
            entry_type,
            download_url: Some(format!("https://raw.example/{}", name)),
        }
    }

    #[test]
    fn test_first_image_wins() {
        let entries = vec![
            entry("README.md", ContentType::File),
            entry("shot.webp", ContentType::File),
            entry("logo.png", ContentType::File),
        ];
        assert_eq!(
            find_preview_image(&entries).as_deref(),
            Some("https://raw.example/shot.webp")
        );
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        for name in ["A.PNG", "b.Jpg", "c.jpeg", "d.GIF", "e.WebP"] {
            assert!(
                find_preview_image(&[entry(name, ContentType::File)]).is_some(),
                "{} should match",
                name
            );
        }
    }

    #[test]
    fn test_ignores_directories_and_lookalikes() {
        let entries = vec![
            entry("images.png", ContentType::Dir),
            entry("png", ContentType::File),
            entry("notes.png.txt", ContentType::File),
            entry("photo.bmp", ContentType::File),
        ];
        assert!(find_preview_image(&entries).is_none());
    }

    #[test]
    fn test_image_without_download_url() {
        let entries = vec![ContentEntry {
            name: "logo.png".to_string(),
            entry_type: ContentType::File,
            download_url: None,
        }];
        assert!(find_preview_image(&entries).is_none());
    }
}

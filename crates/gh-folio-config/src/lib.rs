//! Configuration and file management for gh-folio
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig) with compiled-in defaults

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{
    AppConfig, ContactLink, FeedConfig, FeedSourceKind, ProfileConfig, SplashConfig, SplashMode,
};
pub use config_file::load_config_file;
pub use paths::{app_config_path, cache_dir, config_dir};

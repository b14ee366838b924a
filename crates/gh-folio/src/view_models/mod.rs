//! View models
//!
//! Precomputed display data, so views only do layout.

pub mod portfolio_view_model;

pub use portfolio_view_model::{PortfolioViewModel, ProjectCard, ProjectsSection};

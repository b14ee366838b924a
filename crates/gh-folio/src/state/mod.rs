//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod portfolio;
mod splash;

pub use app::AppState;
pub use portfolio::PortfolioState;
pub use splash::SplashState;

pub mod app_reducer;
pub mod feed_reducer;
pub mod portfolio_reducer;
pub mod splash_reducer;

//! Portfolio screen actions

/// Actions for the Portfolio screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortfolioAction {
    /// Select the next repository card
    SelectNext,
    /// Select the previous repository card
    SelectPrevious,
    /// Open the selected repository in the browser
    OpenSelected,
}

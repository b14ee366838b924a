//! Portfolio Screen State

/// Portfolio screen state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioState {
    /// Index of the selected repository card
    pub selected: usize,
}

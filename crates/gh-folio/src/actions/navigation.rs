//! Navigation actions - shared across screens
//!
//! Generic navigation actions that views translate into their
//! screen-specific actions.

/// Generic navigation actions (vim-style)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Navigate to next item (j, down arrow)
    Next,
    /// Navigate to previous item (k, up arrow)
    Previous,
    /// Activate the current item (Enter, o)
    Activate,
}

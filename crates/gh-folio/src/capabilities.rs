//! View capability system
//!
//! Views declare what kind of keyboard input they understand, so the
//! keyboard middleware can route keys without knowing concrete views.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u32 {
        /// View can navigate to next/previous items
        const ITEM_NAVIGATION = 1 << 0;

        /// View supports vim-style navigation keybindings (j, k)
        const VIM_NAVIGATION_BINDINGS = 1 << 1;

        /// View can activate the current item (Enter, o)
        const ITEM_ACTIVATION = 1 << 2;

        /// Any key dismisses the view
        const SKIP_ON_ANY_KEY = 1 << 3;
    }
}

impl PanelCapabilities {
    /// Check if view supports item navigation
    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }

    /// Check if view supports vim-style navigation (j/k)
    pub fn supports_vim_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION | Self::VIM_NAVIGATION_BINDINGS)
    }

    pub fn supports_activation(self) -> bool {
        self.contains(Self::ITEM_ACTIVATION)
    }

    pub fn skips_on_any_key(self) -> bool {
        self.contains(Self::SKIP_ON_ANY_KEY)
    }
}

impl Default for PanelCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vim_navigation_requires_item_navigation() {
        assert!(!PanelCapabilities::VIM_NAVIGATION_BINDINGS.supports_vim_navigation());
        assert!(
            (PanelCapabilities::ITEM_NAVIGATION | PanelCapabilities::VIM_NAVIGATION_BINDINGS)
                .supports_vim_navigation()
        );
        assert!(PanelCapabilities::default().is_empty());
    }
}

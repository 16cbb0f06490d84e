//! User actions for the TUI.
//!
//! Actions are the result of processing key events and are used to update
//! application state.
//!
//! # Action Flow
//!
//! ```text
//! Key Event → App::handle_key → Action → App::update
//! ```

/// User-initiated actions in the TUI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Action {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Move selection to the next menu entry.
    NextItem,

    /// Move selection to the previous menu entry.
    PreviousItem,

    /// Move selection to the first menu entry.
    FirstItem,

    /// Move selection to the last menu entry.
    LastItem,

    /// Choose a menu entry directly by index (digit keys).
    Choose(usize),

    /// Activate the currently selected menu entry (Enter).
    Activate,

    /// Return to the previous screen.
    Back,

    /// Return all the way to the home screen.
    GoHome,

    // =========================================================================
    // UI State
    // =========================================================================
    /// Toggle the help overlay.
    ToggleHelp,

    /// Hide the help overlay.
    HideHelp,

    /// Show an informational status message.
    ShowStatus(String),

    /// Flag an invalid menu choice in the status bar.
    InvalidChoice,

    /// Clear the status message.
    ClearStatus,

    // =========================================================================
    // Application Control
    // =========================================================================
    /// Quit the application.
    Quit,

    /// No operation.
    #[default]
    None,
}

impl Action {
    /// Returns `true` if this action requires a re-render.
    #[must_use]
    pub const fn needs_render(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns `true` if this is a navigation action.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NextItem
                | Self::PreviousItem
                | Self::FirstItem
                | Self::LastItem
                | Self::Choose(_)
                | Self::Activate
                | Self::Back
                | Self::GoHome
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_needs_render() {
        assert!(Action::NextItem.needs_render());
        assert!(Action::ToggleHelp.needs_render());
        assert!(!Action::None.needs_render());
    }

    #[test]
    fn test_action_is_navigation() {
        assert!(Action::NextItem.is_navigation());
        assert!(Action::Choose(3).is_navigation());
        assert!(Action::Back.is_navigation());

        assert!(!Action::Quit.is_navigation());
        assert!(!Action::ToggleHelp.is_navigation());
    }

    #[test]
    fn test_action_default() {
        assert_eq!(Action::default(), Action::None);
    }
}

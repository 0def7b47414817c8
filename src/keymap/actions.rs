//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions on the listing screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation ============
    /// Scroll the listing up by one campaign
    MoveUp,
    /// Scroll the listing down by one campaign
    MoveDown,
    /// Jump up by a page
    PageUp,
    /// Jump down by a page
    PageDown,
    /// Go to the first campaign
    GoToTop,
    /// Go to the last campaign
    GoToEnd,

    // ============ Confirmation ============
    /// Activate the focused control (the retry button on the error screen)
    Confirm,
    /// Cancel / leave
    Cancel,

    // ============ Loading ============
    /// Retry after a network failure
    Retry,
    /// Reload the campaign list
    Refresh,

    // ============ Global ============
    /// Quit the application
    Quit,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Scroll up",
            Action::MoveDown => "Scroll down",
            Action::PageUp => "Page up",
            Action::PageDown => "Page down",
            Action::GoToTop => "Go to top",
            Action::GoToEnd => "Go to end",
            Action::Confirm => "Confirm",
            Action::Cancel => "Cancel / Go back",
            Action::Retry => "Retry",
            Action::Refresh => "Reload campaigns",
            Action::Quit => "Quit",
        }
    }

    /// Get action category for grouping in hints
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::PageUp
            | Action::PageDown
            | Action::GoToTop
            | Action::GoToEnd => "Navigation",

            Action::Confirm | Action::Cancel => "Selection",

            Action::Retry | Action::Refresh => "Loading",

            Action::Quit => "Global",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_description() {
        assert_eq!(Action::MoveUp.description(), "Scroll up");
        assert_eq!(Action::Quit.description(), "Quit");
    }

    #[test]
    fn test_action_category() {
        assert_eq!(Action::PageDown.category(), "Navigation");
        assert_eq!(Action::Retry.category(), "Loading");
        assert_eq!(Action::Quit.category(), "Global");
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&Action::GoToEnd).unwrap();
        assert_eq!(json, "\"go_to_end\"");

        let action: Action = serde_json::from_str("\"retry\"").unwrap();
        assert_eq!(action, Action::Retry);
    }
}

//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for the Input view
pub mod input_view {
    use super::*;

    /// Editor border color
    pub const EDITOR_BORDER: Color = Color::Cyan;
    /// Placeholder/hint text color
    pub const PLACEHOLDER: Color = Color::DarkGray;
    /// The `git log` command line shown above the editor
    pub const COMMAND_HINT: Color = Color::Green;
}

/// Colors for the Results view
pub mod results_view {
    use super::*;

    /// Group id color
    pub const GROUP_ID: Color = Color::Yellow;
    /// Category title color
    pub const CATEGORY: Color = Color::Cyan;
    /// Group date color
    pub const DATE: Color = Color::Magenta;
    /// Commit count badge color
    pub const COUNT: Color = Color::DarkGray;
    /// Commit author color
    pub const AUTHOR: Color = Color::Green;
    /// Flat-mode serial number color
    pub const SERIAL: Color = Color::DarkGray;
}

/// Selection colors shared by list-style views
pub mod selection {
    use super::*;

    /// Selected row foreground
    pub const FG: Color = Color::White;
    /// Selected row background
    pub const BG: Color = Color::DarkGray;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_view_colors_defined() {
        let _ = input_view::EDITOR_BORDER;
        let _ = input_view::COMMAND_HINT;
    }

    #[test]
    fn test_results_view_colors_defined() {
        let _ = results_view::GROUP_ID;
        let _ = results_view::CATEGORY;
        let _ = results_view::AUTHOR;
    }
}

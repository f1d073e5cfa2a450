//! UI symbols (markers, tree prefixes)

/// Markers in the Results view group tree
pub mod markers {
    /// Expanded group marker
    pub const EXPANDED: &str = "▾ ";
    /// Collapsed group marker
    pub const COLLAPSED: &str = "▸ ";
    /// Commit row indent under an expanded group
    pub const COMMIT_INDENT: &str = "    ";
}

/// Empty state indicators
pub mod empty {
    /// Shown when the pipeline produced no commits
    pub const NO_RESULTS: &str = "No commits to show.";
    /// Hint under the empty-results message
    pub const NO_RESULTS_HINT: &str = "Check the log format, or press f to relax the noise filter";
    /// Shown when the Input view editor is empty
    pub const NO_INPUT_HINT: &str = "Paste git log output here, or press Ctrl+R to load a repository";
}

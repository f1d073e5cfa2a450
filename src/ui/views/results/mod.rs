//! Results View - classified and grouped commits
//!
//! Shows the pipeline output either as a tree of (date, category) groups
//! with expandable commit children, or as one flat row per commit.

mod input;
mod render;

use crate::classify::PipelineOutput;

/// Default file name offered in the export input bar
pub const DEFAULT_EXPORT_PATH: &str = "grouped_commits.csv";

/// Input mode for the Results view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Export path input mode
    ExportInput,
}

/// Actions that the Results view can request from App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsAction {
    /// No action needed
    None,
    /// Write the current output to the given CSV path
    Export(String),
    /// Toggle the noise filter and re-run the pipeline
    ToggleFilter,
    /// Toggle grouped/flat layout and re-run the pipeline
    ToggleLayout,
}

/// One display row in the results list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Row {
    /// Group header row (index into groups)
    Group(usize),
    /// Commit row under an expanded group
    GroupCommit { group: usize, commit: usize },
    /// Flat-mode commit row (index into commits)
    Flat(usize),
}

/// Results view state
#[derive(Debug)]
pub struct ResultsView {
    /// Pipeline output to display
    pub output: PipelineOutput,
    /// Expansion state per group (grouped mode only)
    expanded: Vec<bool>,
    /// Flattened display rows (rebuilt on data/expansion changes)
    rows: Vec<Row>,
    /// Currently selected index in `rows`
    pub selected_index: usize,
    /// Scroll offset for display
    pub scroll_offset: usize,
    /// Current input mode
    pub input_mode: InputMode,
    /// Buffer for the export path input bar
    pub input_buffer: String,
}

impl Default for ResultsView {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsView {
    /// Create a new, empty Results view
    pub fn new() -> Self {
        Self {
            output: PipelineOutput::Grouped(Vec::new()),
            expanded: Vec::new(),
            rows: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            input_mode: InputMode::default(),
            input_buffer: String::new(),
        }
    }

    /// Replace the displayed output; groups start expanded
    pub fn set_output(&mut self, output: PipelineOutput) {
        self.expanded = match &output {
            PipelineOutput::Grouped(groups) => vec![true; groups.len()],
            PipelineOutput::Flat(_) => Vec::new(),
        };
        self.output = output;
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.rebuild_rows();
    }

    /// Number of display rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True while the export path input bar is open
    pub fn in_input_bar(&self) -> bool {
        self.input_mode == InputMode::ExportInput
    }

    /// Expansion state for a group index (grouped mode only)
    pub(crate) fn is_expanded(&self, group: usize) -> bool {
        self.expanded.get(group).copied().unwrap_or(false)
    }

    /// Rebuild the flattened display rows from data and expansion state
    fn rebuild_rows(&mut self) {
        self.rows.clear();

        match &self.output {
            PipelineOutput::Grouped(groups) => {
                for (g, group) in groups.iter().enumerate() {
                    self.rows.push(Row::Group(g));
                    if self.expanded.get(g).copied().unwrap_or(false) {
                        // expanded: one child row per commit
                        for c in 0..group.commits.len() {
                            self.rows.push(Row::GroupCommit {
                                group: g,
                                commit: c,
                            });
                        }
                    }
                }
            }
            PipelineOutput::Flat(commits) => {
                for i in 0..commits.len() {
                    self.rows.push(Row::Flat(i));
                }
            }
        }

        if self.selected_index >= self.rows.len() {
            self.selected_index = self.rows.len().saturating_sub(1);
        }
    }

    /// Expand or collapse the group under the cursor.
    ///
    /// On a commit row, collapses the commit's parent group. No-op in
    /// flat mode.
    pub fn toggle_expand(&mut self) {
        let group = match self.rows.get(self.selected_index) {
            Some(Row::Group(g)) => *g,
            Some(Row::GroupCommit { group, .. }) => *group,
            _ => return,
        };

        if let Some(flag) = self.expanded.get_mut(group) {
            *flag = !*flag;
        }

        self.rebuild_rows();

        // Keep the cursor on the toggled group header
        if let Some(pos) = self.rows.iter().position(|row| *row == Row::Group(group)) {
            self.selected_index = pos;
        }
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.rows.len() {
            self.selected_index += 1;
        }
    }

    /// Move to first row
    pub fn move_to_top(&mut self) {
        self.selected_index = 0;
    }

    /// Move to last row
    pub fn move_to_bottom(&mut self) {
        self.selected_index = self.rows.len().saturating_sub(1);
    }

    /// Open the export path input bar, pre-filled with the default name
    pub fn start_export_input(&mut self) {
        self.input_mode = InputMode::ExportInput;
        self.input_buffer = DEFAULT_EXPORT_PATH.to_string();
    }

    /// Close the input bar without submitting
    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }
}

#[cfg(test)]
mod tests;

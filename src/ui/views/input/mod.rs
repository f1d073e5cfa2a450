//! Input View - raw log text editor
//!
//! The main view of gci: paste `git log` output here (or load it from a
//! repository path) and run the grouping pipeline over it.

mod input;
mod render;

use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::ui::{symbols, theme};

/// Input mode for the Input view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys go to the log text editor
    #[default]
    Editing,
    /// Repository path input mode (for loading log text via git)
    RepoInput,
}

/// Actions that the Input view can request from App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No action needed
    None,
    /// Run the pipeline over the current editor text
    RunPipeline(String),
    /// Load log text from a repository path (optional branch)
    LoadRepo {
        path: String,
        branch: Option<String>,
    },
}

/// Input view state
#[derive(Debug)]
pub struct InputView {
    /// Multi-line editor holding the raw log text
    pub(crate) textarea: TextArea<'static>,
    /// Current input mode
    pub input_mode: InputMode,
    /// Buffer for the repository path input bar
    pub input_buffer: String,
}

impl Default for InputView {
    fn default() -> Self {
        Self::new()
    }
}

impl InputView {
    /// Create a new Input view with an empty editor
    pub fn new() -> Self {
        Self {
            textarea: new_textarea(""),
            input_mode: InputMode::default(),
            input_buffer: String::new(),
        }
    }

    /// Current editor content
    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Replace the editor content (used after loading a repository log)
    pub fn set_text(&mut self, raw: &str) {
        self.textarea = new_textarea(raw);
    }

    /// Clear the editor
    pub fn clear(&mut self) {
        self.set_text("");
    }

    /// True while the repository path input bar is open
    pub fn in_input_bar(&self) -> bool {
        self.input_mode == InputMode::RepoInput
    }

    /// Open the repository path input bar
    pub fn start_repo_input(&mut self) {
        self.input_mode = InputMode::RepoInput;
        self.input_buffer.clear();
    }

    /// Close the input bar without submitting
    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Editing;
        self.input_buffer.clear();
    }
}

/// Build an editor holding `raw`, with the shared placeholder configured
fn new_textarea(raw: &str) -> TextArea<'static> {
    let mut textarea = if raw.is_empty() {
        TextArea::default()
    } else {
        TextArea::new(raw.lines().map(|line| line.to_string()).collect())
    };
    textarea.set_placeholder_text(symbols::empty::NO_INPUT_HINT);
    textarea.set_placeholder_style(Style::default().fg(theme::input_view::PLACEHOLDER));
    textarea
}

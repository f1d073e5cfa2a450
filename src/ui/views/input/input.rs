//! Input handling for the Input view

use crossterm::event::{KeyCode, KeyEvent};

use crate::keys;

use super::{InputAction, InputMode, InputView};

impl InputView {
    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent) -> InputAction {
        match self.input_mode {
            InputMode::Editing => self.handle_editing_key(key),
            InputMode::RepoInput => self.handle_repo_input_key(key),
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> InputAction {
        if keys::is_run_pipeline_key(&key) {
            return InputAction::RunPipeline(self.text());
        }

        if keys::is_load_repo_key(&key) {
            self.start_repo_input();
            return InputAction::None;
        }

        if keys::is_clear_input_key(&key) {
            self.clear();
            return InputAction::None;
        }

        // Everything else belongs to the editor (characters, newlines, cursor)
        self.textarea.input(key);
        InputAction::None
    }

    fn handle_repo_input_key(&mut self, key: KeyEvent) -> InputAction {
        match key.code {
            keys::SUBMIT => {
                let action = parse_repo_input(&self.input_buffer);
                self.cancel_input();
                action
            }
            keys::ESC => {
                self.cancel_input();
                InputAction::None
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                InputAction::None
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                InputAction::None
            }
            _ => InputAction::None,
        }
    }
}

/// Parse `path [branch]` from the input bar.
///
/// An empty path means the current directory; the executor treats it as
/// such when the action reaches App.
fn parse_repo_input(buffer: &str) -> InputAction {
    let mut parts = buffer.split_whitespace();
    let path = parts.next().unwrap_or("").to_string();
    let branch = parts.next().map(|b| b.to_string());

    InputAction::LoadRepo { path, branch }
}

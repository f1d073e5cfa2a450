//! Input handling for the Results view

use crossterm::event::{KeyCode, KeyEvent};

use crate::keys;

use super::{InputMode, ResultsAction, ResultsView};

impl ResultsView {
    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent) -> ResultsAction {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::ExportInput => self.handle_export_input_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> ResultsAction {
        match key.code {
            k if keys::is_move_down(k) => {
                self.move_down();
                ResultsAction::None
            }
            k if keys::is_move_up(k) => {
                self.move_up();
                ResultsAction::None
            }
            k if k == keys::GO_TOP => {
                self.move_to_top();
                ResultsAction::None
            }
            k if k == keys::GO_BOTTOM => {
                self.move_to_bottom();
                ResultsAction::None
            }
            k if k == keys::TOGGLE_EXPAND => {
                self.toggle_expand();
                ResultsAction::None
            }
            k if k == keys::EXPORT => {
                self.start_export_input();
                ResultsAction::None
            }
            k if k == keys::TOGGLE_FILTER => ResultsAction::ToggleFilter,
            k if k == keys::TOGGLE_LAYOUT => ResultsAction::ToggleLayout,
            _ => ResultsAction::None,
        }
    }

    fn handle_export_input_key(&mut self, key: KeyEvent) -> ResultsAction {
        match key.code {
            keys::SUBMIT => {
                let path = self.input_buffer.trim().to_string();
                self.cancel_input();
                if path.is_empty() {
                    ResultsAction::None
                } else {
                    ResultsAction::Export(path)
                }
            }
            keys::ESC => {
                self.cancel_input();
                ResultsAction::None
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                ResultsAction::None
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                ResultsAction::None
            }
            _ => ResultsAction::None,
        }
    }
}

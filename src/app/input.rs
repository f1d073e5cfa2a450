//! Input handling for the application

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{App, View};
use crate::keys;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        // Handle Ctrl+C globally
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.quit();
            return;
        }

        // The Input view editor owns plain characters, so global keys only
        // apply outside it (Tab is the one exception for view switching).
        if self.current_view == View::Input {
            if !self.input_view.in_input_bar() && key.code == keys::TAB {
                self.next_view();
                return;
            }
            let action = self.input_view.handle_key(key);
            self.handle_input_action(action);
            return;
        }

        // Results export input bar takes precedence over global keys
        if self.current_view == View::Results && self.results_view.in_input_bar() {
            let action = self.results_view.handle_key(key);
            self.handle_results_action(action);
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        self.handle_view_key(key);
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            keys::BACK => {
                self.go_back();
                true
            }
            keys::ESC => {
                self.go_back();
                true
            }
            keys::HELP => {
                self.go_to_view(View::Help);
                true
            }
            keys::TAB => {
                self.next_view();
                true
            }
            _ => false,
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        match self.current_view {
            View::Input => {
                // Handled earlier; the editor consumes keys directly
            }
            View::Results => {
                let action = self.results_view.handle_key(key);
                self.handle_results_action(action);
            }
            View::Help => {
                // Help view only uses global keys
            }
        }
    }
}

//! Application state and view management

use crate::classify::PipelineOptions;
use crate::git::GitExecutor;
use crate::model::Notification;
use crate::ui::views::{InputView, ResultsView};

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Input,
    Results,
    Help,
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// Previous view (for back navigation)
    pub(crate) previous_view: Option<View>,
    /// Input view state
    pub input_view: InputView,
    /// Results view state
    pub results_view: ResultsView,
    /// git executor
    pub git: GitExecutor,
    /// Pipeline options (noise filter, grouped/flat layout)
    pub options: PipelineOptions,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display (success/info/warning messages)
    pub notification: Option<Notification>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new() -> Self {
        let mut app = Self {
            running: true,
            current_view: View::Input,
            previous_view: None,
            input_view: InputView::new(),
            results_view: ResultsView::new(),
            git: GitExecutor::new(),
            options: PipelineOptions::default(),
            error_message: None,
            notification: None,
        };

        // Surface a missing git install before the first key press
        app.check_git();
        app
    }

    /// Switch to next view (Tab key)
    pub(crate) fn next_view(&mut self) {
        let next = match self.current_view {
            View::Input => View::Results,
            View::Results => View::Input,
            View::Help => View::Input,
        };
        self.go_to_view(next);
    }

    /// Navigate to a specific view
    pub(crate) fn go_to_view(&mut self, view: View) {
        if self.current_view != view {
            self.previous_view = Some(self.current_view);
            self.current_view = view;
        }
    }

    /// Go back to previous view
    pub(crate) fn go_back(&mut self) {
        if let Some(prev) = self.previous_view.take() {
            self.current_view = prev;
        } else {
            self.current_view = View::Input;
        }
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Clear expired notification
    pub fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}

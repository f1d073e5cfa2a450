//! Rendering logic for the application

use ratatui::{Frame, layout::Rect};

use super::state::{App, View};
use crate::ui::widgets::{
    render_error_banner, render_help_panel, render_input_status_bar, render_results_status_bar,
};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Clone notification to avoid borrow conflict with &mut self in view render
        let notification = self
            .notification
            .as_ref()
            .filter(|n| !n.is_expired())
            .cloned();

        let view_area = main_view_area(frame.area());

        match self.current_view {
            View::Input => {
                self.input_view
                    .render(frame, view_area, notification.as_ref());
                render_input_status_bar(frame);
            }
            View::Results => {
                self.results_view
                    .render(frame, view_area, self.options, notification.as_ref());
                render_results_status_bar(frame);
            }
            View::Help => {
                render_help_panel(frame, view_area);
            }
        }

        // Error banner above the status bar (errors are always shown prominently)
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error);
        }
    }
}

/// Main view area: everything above the one-line status bar
fn main_view_area(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(1),
    }
}

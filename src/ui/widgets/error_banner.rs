//! Error banner
//!
//! One-line banner for git and export failures, drawn directly above the
//! status bar so it never covers the result list or the editor.

use ratatui::{Frame, prelude::*, widgets::Paragraph};

use crate::ui::components;

/// Banner row: the line just above the one-line status bar
fn banner_area(area: Rect) -> Option<Rect> {
    // Needs room for the banner, the status bar, and some content
    if area.height < 3 {
        return None;
    }

    Some(Rect {
        x: area.x + 2,
        y: area.y + area.height - 2,
        width: area.width.saturating_sub(4),
        height: 1,
    })
}

/// Render an error message above the status bar
pub fn render_error_banner(frame: &mut Frame, error: &str) {
    let Some(banner) = banner_area(frame.area()) else {
        return;
    };

    let error_line = components::build_error_line(error);
    frame.render_widget(Paragraph::new(error_line), banner);
}

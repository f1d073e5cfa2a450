//! Status bar widget

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::{self, KeyHint};

/// Build a status bar line from key hints
pub fn build_status_bar(hints: &[KeyHint]) -> Line<'static> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Calculate status bar area at bottom of screen
fn status_bar_area(frame: &Frame) -> Option<Rect> {
    let area = frame.area();
    if area.height < 2 {
        return None;
    }

    Some(Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    })
}

/// Render the status bar for the Input view
pub fn render_input_status_bar(frame: &mut Frame) {
    let Some(status_area) = status_bar_area(frame) else {
        return;
    };

    let status = build_status_bar(keys::INPUT_VIEW_HINTS);
    frame.render_widget(Paragraph::new(status), status_area);
}

/// Render the status bar for the Results view
pub fn render_results_status_bar(frame: &mut Frame) {
    let Some(status_area) = status_bar_area(frame) else {
        return;
    };

    let status = build_status_bar(keys::RESULTS_VIEW_HINTS);
    frame.render_widget(Paragraph::new(status), status_area);
}

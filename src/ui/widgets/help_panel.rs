//! Help panel widget
//!
//! Displays key bindings grouped by section.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::keys::{self, KeyBindEntry};

/// Build all help panel lines
pub fn build_help_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(Line::from("Key bindings:".bold()));
    lines.push(Line::from(""));

    push_section(&mut lines, "Global", keys::GLOBAL_KEYS);
    push_section(&mut lines, "Input View", keys::INPUT_VIEW_KEYS);
    push_section(&mut lines, "Results View", keys::RESULTS_VIEW_KEYS);

    lines
}

fn push_section(lines: &mut Vec<Line<'static>>, title: &'static str, entries: &[KeyBindEntry]) {
    lines.push(Line::from(title.bold().cyan()));

    for entry in entries {
        lines.push(Line::from(format!(
            "  {:<8} {}",
            entry.key, entry.description
        )));
    }

    lines.push(Line::from(""));
}

/// Render the help panel over the whole area
pub fn render_help_panel(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(" Help ").bold().cyan().centered());

    let paragraph = Paragraph::new(build_help_lines()).block(block);
    frame.render_widget(paragraph, area);
}

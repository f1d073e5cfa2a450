//! Rendering for the Input view

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
};

use crate::git::constants::flags;
use crate::model::Notification;
use crate::ui::{components, theme};

use super::{InputMode, InputView};

impl InputView {
    /// Render the view with optional notification in the title bar
    pub fn render(&mut self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let (command_area, editor_area, input_area) = match self.input_mode {
            InputMode::Editing => {
                let chunks =
                    Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(area);
                (chunks[0], chunks[1], None)
            }
            InputMode::RepoInput => {
                let chunks = Layout::vertical([
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(3),
                ])
                .split(area);
                (chunks[0], chunks[1], Some(chunks[2]))
            }
        };

        self.render_command_hint(frame, command_area);
        self.render_editor(frame, editor_area, notification);

        if let Some(input_area) = input_area {
            self.render_input_bar(frame, input_area);
        }
    }

    /// The exact command whose output this view expects
    fn render_command_hint(&self, frame: &mut Frame, area: Rect) {
        let command = format!(
            " git log \"{}\" {} ",
            flags::PRETTY_LOG,
            flags::DATE_ISO_STRICT
        );
        let line = Line::from(command)
            .style(Style::default().fg(theme::input_view::COMMAND_HINT))
            .centered();
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_editor(&mut self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let title = Line::from(" gci - Commit Log Input ").bold().cyan().centered();

        let title_width = title.width();
        let available = area.width.saturating_sub(title_width as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available)))
            .filter(|line| !line.spans.is_empty());

        let block = components::bordered_block_with_notification(title, notif_line)
            .border_style(Style::default().fg(theme::input_view::EDITOR_BORDER));

        self.textarea.set_block(block);
        frame.render_widget(&self.textarea, area);
    }

    fn render_input_bar(&self, frame: &mut Frame, area: Rect) {
        let input_text = format!("Repo: {}", self.input_buffer);

        let available_width = area.width.saturating_sub(2) as usize;
        if available_width == 0 {
            return;
        }

        // Show end of input when it overflows (UTF-8 safe)
        let char_count = input_text.chars().count();
        let display_text = if char_count > available_width {
            let skip = char_count.saturating_sub(available_width.saturating_sub(1));
            format!("…{}", input_text.chars().skip(skip).collect::<String>())
        } else {
            input_text
        };

        let paragraph = Paragraph::new(display_text).block(components::bordered_block(
            Line::from(" ^R Repository path [branch] "),
        ));

        frame.render_widget(paragraph, area);

        let cursor_pos = char_count.min(available_width);
        frame.set_cursor_position((area.x + cursor_pos as u16 + 1, area.y + 1));
    }
}

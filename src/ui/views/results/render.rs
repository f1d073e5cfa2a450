//! Rendering for the Results view

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::classify::{PipelineOptions, PipelineOutput};
use crate::model::Notification;
use crate::ui::{components, symbols, theme};

use super::{InputMode, ResultsView, Row};

impl ResultsView {
    /// Render the view with optional notification in the title bar
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        options: PipelineOptions,
        notification: Option<&Notification>,
    ) {
        let (list_area, input_area) = match self.input_mode {
            InputMode::Normal => (area, None),
            InputMode::ExportInput => {
                let chunks =
                    Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(area);
                (chunks[0], Some(chunks[1]))
            }
        };

        self.render_result_list(frame, list_area, options, notification);

        if let Some(input_area) = input_area {
            self.render_input_bar(frame, input_area);
        }
    }

    fn render_result_list(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        options: PipelineOptions,
        notification: Option<&Notification>,
    ) {
        let title = self.build_title(options);

        let title_width = title.width();
        let available = area.width.saturating_sub(title_width as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available)))
            .filter(|line| !line.spans.is_empty());

        let block = components::bordered_block_with_notification(title, notif_line);

        if self.output.is_empty() {
            let paragraph = components::empty_state(
                symbols::empty::NO_RESULTS,
                Some(symbols::empty::NO_RESULTS_HINT),
            )
            .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize; // borders
        if inner_height == 0 {
            return;
        }

        self.scroll_offset = self.calculate_scroll_offset(inner_height);

        let mut lines: Vec<Line> = Vec::new();
        for (idx, row) in self
            .rows
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(inner_height)
        {
            let is_selected = idx == self.selected_index;
            lines.push(self.build_row_line(*row, is_selected));
        }

        let paragraph = Paragraph::new(lines).block(block);
        frame.render_widget(paragraph, area);
    }

    fn build_title(&self, options: PipelineOptions) -> Line<'static> {
        let layout = if options.grouped { "Grouped" } else { "Flat" };
        let filter = if options.noise_filter { "on" } else { "off" };
        let count = self.output.commit_count();

        Line::from(format!(
            " gci - Results [{}] [Filter: {}] ({} commits) ",
            layout, filter, count
        ))
        .bold()
        .cyan()
        .centered()
    }

    fn calculate_scroll_offset(&self, visible_rows: usize) -> usize {
        if visible_rows == 0 {
            return 0;
        }

        let mut offset = self.scroll_offset;

        // Ensure selected item is visible
        if self.selected_index < offset {
            offset = self.selected_index;
        } else if self.selected_index >= offset + visible_rows {
            offset = self.selected_index - visible_rows + 1;
        }

        offset
    }

    fn build_row_line(&self, row: Row, is_selected: bool) -> Line<'static> {
        let mut line = match row {
            Row::Group(g) => self.build_group_line(g),
            Row::GroupCommit { group, commit } => self.build_group_commit_line(group, commit),
            Row::Flat(i) => self.build_flat_line(i),
        };

        if is_selected {
            line = line.style(
                Style::default()
                    .fg(theme::selection::FG)
                    .bg(theme::selection::BG)
                    .add_modifier(Modifier::BOLD),
            );
        }

        line
    }

    fn build_group_line(&self, g: usize) -> Line<'static> {
        let PipelineOutput::Grouped(groups) = &self.output else {
            return Line::from("");
        };
        let Some(group) = groups.get(g) else {
            return Line::from("");
        };

        let marker = if self.is_expanded(g) {
            symbols::markers::EXPANDED
        } else {
            symbols::markers::COLLAPSED
        };

        Line::from(vec![
            Span::raw(marker),
            Span::styled(
                format!("{} ", group.id),
                Style::default().fg(theme::results_view::GROUP_ID),
            ),
            Span::styled(
                format!("{} ", group.title),
                Style::default().fg(theme::results_view::CATEGORY),
            ),
            Span::styled(
                format!("{} ", group.date),
                Style::default().fg(theme::results_view::DATE),
            ),
            Span::styled(
                format!("({} commits)", group.len()),
                Style::default().fg(theme::results_view::COUNT),
            ),
        ])
    }

    fn build_group_commit_line(&self, g: usize, c: usize) -> Line<'static> {
        let PipelineOutput::Grouped(groups) = &self.output else {
            return Line::from("");
        };
        let Some(entry) = groups.get(g).and_then(|group| group.commits.get(c)) else {
            return Line::from("");
        };

        Line::from(vec![
            Span::raw(symbols::markers::COMMIT_INDENT),
            Span::styled(
                format!("{}: ", entry.author),
                Style::default().fg(theme::results_view::AUTHOR),
            ),
            Span::raw(entry.message.clone()),
        ])
    }

    fn build_flat_line(&self, i: usize) -> Line<'static> {
        let PipelineOutput::Flat(commits) = &self.output else {
            return Line::from("");
        };
        let Some(commit) = commits.get(i) else {
            return Line::from("");
        };

        Line::from(vec![
            Span::styled(
                format!("{:>4} ", i + 1),
                Style::default().fg(theme::results_view::SERIAL),
            ),
            Span::styled(
                format!("{} ", commit.category),
                Style::default().fg(theme::results_view::CATEGORY),
            ),
            Span::styled(
                format!("{} ", commit.date),
                Style::default().fg(theme::results_view::DATE),
            ),
            Span::raw(commit.message.clone()),
        ])
    }

    fn render_input_bar(&self, frame: &mut Frame, area: Rect) {
        let input_text = format!("Save CSV to: {}", self.input_buffer);

        let available_width = area.width.saturating_sub(2) as usize;
        if available_width == 0 {
            return;
        }

        let char_count = input_text.chars().count();
        let display_text = if char_count > available_width {
            let skip = char_count.saturating_sub(available_width.saturating_sub(1));
            format!("…{}", input_text.chars().skip(skip).collect::<String>())
        } else {
            input_text
        };

        let paragraph = Paragraph::new(display_text)
            .block(components::bordered_block(Line::from(" e Export ")));

        frame.render_widget(paragraph, area);

        let cursor_pos = char_count.min(available_width);
        frame.set_cursor_position((area.x + cursor_pos as u16 + 1, area.y + 1));
    }
}

//! Unit tests for the Results view

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::classify::PipelineOutput;
use crate::model::{ClassifiedCommit, CommitGroup, GroupEntry};

use super::{DEFAULT_EXPORT_PATH, InputMode, ResultsAction, ResultsView, Row};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn grouped_output() -> PipelineOutput {
    PipelineOutput::Grouped(vec![
        CommitGroup {
            id: "group-1".to_string(),
            title: "Bug Fixes",
            date: "2024-03-01".to_string(),
            commits: vec![
                GroupEntry {
                    author: "Jane".to_string(),
                    message: "fix: crash".to_string(),
                },
                GroupEntry {
                    author: "Bob".to_string(),
                    message: "fix: typo".to_string(),
                },
            ],
        },
        CommitGroup {
            id: "group-2".to_string(),
            title: "Features",
            date: "2024-02-28".to_string(),
            commits: vec![GroupEntry {
                author: "Eve".to_string(),
                message: "feat: add widget".to_string(),
            }],
        },
    ])
}

fn flat_output() -> PipelineOutput {
    PipelineOutput::Flat(vec![
        ClassifiedCommit {
            category: "Bug Fixes",
            date: "2024-03-01".to_string(),
            author: "Jane".to_string(),
            message: "fix: crash".to_string(),
        },
        ClassifiedCommit {
            category: "Features",
            date: "2024-02-28".to_string(),
            author: "Eve".to_string(),
            message: "feat: add widget".to_string(),
        },
    ])
}

#[test]
fn test_set_output_expands_all_groups() {
    let mut view = ResultsView::new();
    view.set_output(grouped_output());

    // 2 group headers + 3 commit rows
    assert_eq!(view.row_count(), 5);
    assert!(view.is_expanded(0));
    assert!(view.is_expanded(1));
}

#[test]
fn test_toggle_expand_collapses_group() {
    let mut view = ResultsView::new();
    view.set_output(grouped_output());

    view.handle_key(key(KeyCode::Enter));
    assert!(!view.is_expanded(0));
    // group-1's two commit rows disappear
    assert_eq!(view.row_count(), 3);

    view.handle_key(key(KeyCode::Enter));
    assert!(view.is_expanded(0));
    assert_eq!(view.row_count(), 5);
}

#[test]
fn test_toggle_expand_from_commit_row_collapses_parent() {
    let mut view = ResultsView::new();
    view.set_output(grouped_output());

    // Move onto group-1's first commit row
    view.handle_key(key(KeyCode::Char('j')));
    view.handle_key(key(KeyCode::Enter));

    assert!(!view.is_expanded(0));
    // Cursor lands back on the group header
    assert_eq!(view.selected_index, 0);
}

#[test]
fn test_navigation_clamps_at_edges() {
    let mut view = ResultsView::new();
    view.set_output(flat_output());

    view.handle_key(key(KeyCode::Char('k')));
    assert_eq!(view.selected_index, 0);

    view.handle_key(key(KeyCode::Char('G')));
    assert_eq!(view.selected_index, 1);

    view.handle_key(key(KeyCode::Char('j')));
    assert_eq!(view.selected_index, 1);

    view.handle_key(key(KeyCode::Char('g')));
    assert_eq!(view.selected_index, 0);
}

#[test]
fn test_flat_mode_has_no_group_rows() {
    let mut view = ResultsView::new();
    view.set_output(flat_output());

    assert_eq!(view.row_count(), 2);
    // Enter does nothing in flat mode
    view.handle_key(key(KeyCode::Enter));
    assert_eq!(view.row_count(), 2);
}

#[test]
fn test_export_input_flow() {
    let mut view = ResultsView::new();
    view.set_output(grouped_output());

    view.handle_key(key(KeyCode::Char('e')));
    assert_eq!(view.input_mode, InputMode::ExportInput);
    assert_eq!(view.input_buffer, DEFAULT_EXPORT_PATH);

    let action = view.handle_key(key(KeyCode::Enter));
    assert_eq!(
        action,
        ResultsAction::Export(DEFAULT_EXPORT_PATH.to_string())
    );
    assert_eq!(view.input_mode, InputMode::Normal);
}

#[test]
fn test_export_input_empty_path_is_ignored() {
    let mut view = ResultsView::new();
    view.set_output(grouped_output());

    view.handle_key(key(KeyCode::Char('e')));
    for _ in 0..DEFAULT_EXPORT_PATH.len() {
        view.handle_key(key(KeyCode::Backspace));
    }

    let action = view.handle_key(key(KeyCode::Enter));
    assert_eq!(action, ResultsAction::None);
}

#[test]
fn test_toggle_actions_bubble_up() {
    let mut view = ResultsView::new();
    view.set_output(grouped_output());

    assert_eq!(
        view.handle_key(key(KeyCode::Char('f'))),
        ResultsAction::ToggleFilter
    );
    assert_eq!(
        view.handle_key(key(KeyCode::Char('v'))),
        ResultsAction::ToggleLayout
    );
}

#[test]
fn test_rows_shape_in_grouped_mode() {
    let mut view = ResultsView::new();
    view.set_output(grouped_output());

    assert_eq!(view.rows[0], Row::Group(0));
    assert_eq!(
        view.rows[1],
        Row::GroupCommit {
            group: 0,
            commit: 0
        }
    );
    assert_eq!(view.rows[3], Row::Group(1));
}

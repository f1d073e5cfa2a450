//! Keybinding definitions for gci
//!
//! All keybindings are defined here for easy modification and future config file support.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+G (run the grouping pipeline from the Input view)
/// Note: Accept both 'g' and 'G' for terminal compatibility
pub fn is_run_pipeline_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('g') | KeyCode::Char('G'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+R (load log text from a repository path)
pub fn is_load_repo_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+X (clear the Input view editor)
pub fn is_clear_input_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('x') | KeyCode::Char('X'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys (available in all views)
// =============================================================================

/// Back to the previous view.
///
/// Quitting is Ctrl+C only: in the Input view `q` is a literal editor
/// character, so it can never double as a quit key.
pub const BACK: KeyCode = KeyCode::Char('q');

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Switch between views
pub const TAB: KeyCode = KeyCode::Tab;

/// Back to previous view
pub const ESC: KeyCode = KeyCode::Esc;

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Input keys (used in input-bar modes)
// =============================================================================

/// Submit input (Enter in input mode)
pub const SUBMIT: KeyCode = KeyCode::Enter;

// =============================================================================
// Results View keys
// =============================================================================

/// Expand/collapse the selected group
pub const TOGGLE_EXPAND: KeyCode = KeyCode::Enter;

/// Export the current result to CSV
pub const EXPORT: KeyCode = KeyCode::Char('e');

/// Toggle the noise filter and re-run the pipeline
pub const TOGGLE_FILTER: KeyCode = KeyCode::Char('f');

/// Toggle grouped/flat layout and re-run the pipeline
pub const TOGGLE_LAYOUT: KeyCode = KeyCode::Char('v');

// =============================================================================
// Help text generation
// =============================================================================

/// Key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

/// Global key bindings for help display
pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "q",
        description: "Back to previous view",
    },
    KeyBindEntry {
        key: "?",
        description: "Help",
    },
    KeyBindEntry {
        key: "Tab",
        description: "Switch view",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Back to previous",
    },
    KeyBindEntry {
        key: "Ctrl+c",
        description: "Quit",
    },
];

/// Input View key bindings for help display
pub const INPUT_VIEW_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Ctrl+g",
        description: "Group commits",
    },
    KeyBindEntry {
        key: "Ctrl+r",
        description: "Load log from repository path",
    },
    KeyBindEntry {
        key: "Ctrl+x",
        description: "Clear editor",
    },
];

/// Results View key bindings for help display
pub const RESULTS_VIEW_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Move down/up",
    },
    KeyBindEntry {
        key: "g/G",
        description: "Go to top/bottom",
    },
    KeyBindEntry {
        key: "Enter",
        description: "Expand/collapse group",
    },
    KeyBindEntry {
        key: "e",
        description: "Export CSV",
    },
    KeyBindEntry {
        key: "f",
        description: "Toggle noise filter",
    },
    KeyBindEntry {
        key: "v",
        description: "Toggle grouped/flat layout",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

/// Status bar hints for the Input view
pub const INPUT_VIEW_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "^G",
        label: "Group",
        color: Color::Green,
    },
    KeyHint {
        key: "^R",
        label: "Repo",
        color: Color::Cyan,
    },
    KeyHint {
        key: "^X",
        label: "Clear",
        color: Color::Yellow,
    },
    KeyHint {
        key: "Tab",
        label: "Results",
        color: Color::Blue,
    },
    KeyHint {
        key: "^C",
        label: "Quit",
        color: Color::Red,
    },
];

/// Status bar hints for the Results view
pub const RESULTS_VIEW_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "e",
        label: "Export",
        color: Color::Green,
    },
    KeyHint {
        key: "f",
        label: "Filter",
        color: Color::Cyan,
    },
    KeyHint {
        key: "v",
        label: "Layout",
        color: Color::Cyan,
    },
    KeyHint {
        key: "?",
        label: "Help",
        color: Color::Blue,
    },
    KeyHint {
        key: "q",
        label: "Back",
        color: Color::Red,
    },
];

//! Key mapping from terminal events to viewer actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    RotateCw,
    RotateCcw,
    Quit,
}

/// Map keyboard input to viewer actions.
pub fn handle_key_event(key: KeyEvent) -> Option<ViewerAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(ViewerAction::Quit);
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(ViewerAction::Quit),
        KeyCode::Char('r') | KeyCode::Right => Some(ViewerAction::RotateCw),
        KeyCode::Char('R') | KeyCode::Left => Some(ViewerAction::RotateCcw),
        _ => None,
    }
}

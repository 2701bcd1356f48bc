//! Key mapping from terminal events to viewport actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_life_types::PanAction;

/// Map keyboard input to a viewport pan.
///
/// Vim motion keys, with the arrow keys as synonyms. Anything unrecognized
/// returns `None` and the frame proceeds with an unchanged offset.
pub fn map_key(key: KeyEvent) -> Option<PanAction> {
    match key.code {
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Left => Some(PanAction::Left),
        KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Right => Some(PanAction::Right),
        KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Up => Some(PanAction::Up),
        KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Down => Some(PanAction::Down),
        _ => None,
    }
}

/// Check if key should end the session.
///
/// Raw mode delivers Ctrl-C as an ordinary key event, so the interrupt path
/// is handled here too; both exit cleanly with status 0.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

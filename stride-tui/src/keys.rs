//! Key bindings for list browsing.
//!
//! Only browse-mode keys live here; while the goal form or the chat input
//! has focus, raw key events go straight to the focused editor.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    NextTab,
    MoveUp,
    MoveDown,
    NewGoal,
    ToggleComplete,
    DeleteGoal,
    CycleSort,
    Confirm,
    Cancel,
}

pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyAction::Quit);
    }
    match key.code {
        KeyCode::Char('q') => Some(KeyAction::Quit),
        KeyCode::Tab => Some(KeyAction::NextTab),
        KeyCode::Up | KeyCode::Char('k') => Some(KeyAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(KeyAction::MoveDown),
        KeyCode::Char('n') => Some(KeyAction::NewGoal),
        KeyCode::Char('x') | KeyCode::Char(' ') => Some(KeyAction::ToggleComplete),
        KeyCode::Char('d') => Some(KeyAction::DeleteGoal),
        KeyCode::Char('s') => Some(KeyAction::CycleSort),
        KeyCode::Enter => Some(KeyAction::Confirm),
        KeyCode::Esc => Some(KeyAction::Cancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn test_core_bindings() {
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(KeyAction::Quit));
        assert_eq!(map_key(press(KeyCode::Tab)), Some(KeyAction::NextTab));
        assert_eq!(map_key(press(KeyCode::Char('n'))), Some(KeyAction::NewGoal));
        assert_eq!(map_key(press(KeyCode::Char('s'))), Some(KeyAction::CycleSort));
        assert_eq!(map_key(press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_release_events_ignored() {
        let key = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        };
        assert_eq!(map_key(key), None);
    }
}

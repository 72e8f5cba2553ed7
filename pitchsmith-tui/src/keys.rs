//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    CycleLeft,
    CycleRight,
    Select,
    Edit,
    RemovePain,
    CopyPlaybook,
    CopyChannel,
    OpenHelp,
    Confirm,
    Cancel,
}

/// Map a key event in browse mode. Editor-mode keys go straight to the
/// textarea and never pass through here.
pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Char('e') => Some(Action::Edit),
        KeyCode::Char('d') => Some(Action::RemovePain),
        KeyCode::Char('y') => Some(Action::CopyPlaybook),
        KeyCode::Char('c') => Some(Action::CopyChannel),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::CycleLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::CycleRight),
        KeyCode::Char(' ') => Some(Action::Select),
        _ => None,
    }
}

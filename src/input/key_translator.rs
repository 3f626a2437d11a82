//! Translation from terminal key events to editor keys

use super::keys::{Command, Key};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a crossterm key press to an editor [`Key`].
///
/// Returns `None` for key releases, non-ASCII characters and unbound control
/// chords.
pub fn translate(event: KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    translate_code(event.code, event.modifiers)
}

/// Map a key code plus modifiers to an editor [`Key`]
pub fn translate_code(code: KeyCode, modifiers: KeyModifiers) -> Option<Key> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('s') => Some(Key::Command(Command::Save)),
            KeyCode::Char('q') => Some(Key::Command(Command::Quit)),
            KeyCode::Char('f') => Some(Key::Command(Command::Find)),
            KeyCode::Char('l') => Some(Key::Command(Command::Refresh)),
            KeyCode::Char('h') => Some(Key::Backspace),
            _ => None,
        };
    }

    match code {
        KeyCode::Char(c) if c.is_ascii() && !c.is_ascii_control() => Some(Key::Char(c as u8)),
        KeyCode::Char(_) => None,
        KeyCode::Tab => Some(Key::Char(b'\t')),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        _ => None,
    }
}

/// Editor-level commands bound to control keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Save,
    Quit,
    Find,
    /// Redraw the screen; no state change
    Refresh,
}

/// Logical input event consumed by the editor core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A byte to insert (printable ASCII or tab)
    Char(u8),
    Enter,
    Escape,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Command(Command),
}

impl Key {
    /// Whether the byte can be typed into a prompt
    pub fn printable(self) -> Option<u8> {
        match self {
            Key::Char(byte) if (b' '..=b'~').contains(&byte) => Some(byte),
            _ => None,
        }
    }
}

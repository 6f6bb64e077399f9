//! Platform-agnostic input event types.
//!
//! Every front end maps its native key events to these types. The shell core
//! never sees raw platform input.

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    Key(KeyPress),
    /// Text pasted as a single chunk.
    Paste(String),
    /// User requested quit.
    Quit,
}

/// Keys the shell distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Tab,
    Enter,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Backspace,
    Delete,
    /// Function key `F<n>`.
    F(u8),
    /// A printable character.
    Char(char),
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    /// Command / super / meta key.
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Whether the platform "command" chord modifier is held (ctrl or meta).
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// A key together with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    /// A key press without modifiers.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// A key press with ctrl held.
    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::NONE
            },
        }
    }

    /// A key press with meta (command) held.
    pub fn meta(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                meta: true,
                ..Modifiers::NONE
            },
        }
    }

    /// Escape, or the command modifier with `c`: clear the current line.
    pub fn is_clear_line(&self) -> bool {
        match self.key {
            Key::Escape => true,
            Key::Char(c) => self.modifiers.command() && c.eq_ignore_ascii_case(&'c'),
            _ => false,
        }
    }
}

impl From<Key> for KeyPress {
    fn from(key: Key) -> Self {
        Self::plain(key)
    }
}

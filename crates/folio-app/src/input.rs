//! Map crossterm events to folio input events.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_types::input::{InputEvent, Key, KeyPress, Modifiers};

/// Translate a terminal event. Returns `None` for events the shell ignores.
///
/// Ctrl+D quits; Ctrl+C is passed through as the clear-line chord.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Paste(text) => Some(InputEvent::Paste(text.clone())),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<InputEvent> {
    // Only handle presses (ignore release/repeat on platforms that send them).
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let modifiers = Modifiers {
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        alt: key.modifiers.contains(KeyModifiers::ALT),
        meta: key.modifiers.intersects(KeyModifiers::SUPER | KeyModifiers::META),
    };
    let mapped = match key.code {
        KeyCode::Char('d') | KeyCode::Char('D') if modifiers.ctrl => {
            return Some(InputEvent::Quit);
        },
        KeyCode::Tab => Key::Tab,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::F(n) => Key::F(n),
        KeyCode::Char(c) => Key::Char(c),
        _ => return None,
    };
    Some(InputEvent::Key(KeyPress {
        key: mapped,
        modifiers,
    }))
}

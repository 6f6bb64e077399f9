//! Session state and the key-event state machine.
//!
//! A [`Session`] is the single owner of all mutable shell state: the history
//! log and the [`InputController`]. Each key event runs to completion before
//! the next one is handled.

use folio_types::input::{InputEvent, Key, KeyPress};

use crate::history::HistoryStore;
use crate::interpreter::{CommandRegistry, Interpreter};
use crate::line_editor::LineEditor;

/// Result of handling one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    /// Whether the platform's own handling of the key should be skipped.
    pub suppress_default: bool,
    /// Whether a line was handed to the interpreter.
    pub submitted: bool,
}

impl KeyOutcome {
    fn suppressed() -> Self {
        Self {
            suppress_default: true,
            submitted: false,
        }
    }

    fn passthrough() -> Self {
        Self::default()
    }
}

/// Live edit buffer plus history browsing state.
///
/// `history_cursor` is `None` while not browsing. `Some(i)` means the buffer
/// mirrors the `i`-th most recent non-empty command (0 = newest), and `draft`
/// holds the edit that was live when browsing began.
#[derive(Debug, Clone, Default)]
pub struct InputController {
    editor: LineEditor,
    history_cursor: Option<usize>,
    draft: String,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        self.editor.text()
    }

    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Complete the buffer when exactly one command name starts with it.
    pub fn complete(&mut self, registry: &CommandRegistry) {
        let matches = registry.completions(self.editor.text());
        if let [only] = matches.as_slice() {
            self.editor.set(*only);
        }
    }

    /// Empty the buffer. Browsing state is left alone.
    pub fn clear_line(&mut self) {
        self.editor.clear();
    }

    /// Step to the next older command. Stops at the oldest one.
    pub fn history_prev(&mut self, history: &HistoryStore) {
        let past = history.past_commands();
        if past.is_empty() {
            return;
        }
        if self.history_cursor.is_none() {
            self.draft = self.editor.text().to_string();
        }
        let next = self.history_cursor.map_or(0, |i| i + 1);
        if next < past.len() {
            self.history_cursor = Some(next);
            self.editor.set(past[past.len() - 1 - next]);
        }
    }

    /// Step to the next newer command, or back to the draft from the newest.
    pub fn history_next(&mut self, history: &HistoryStore) {
        match self.history_cursor {
            None => {},
            Some(0) => self.leave_browsing(),
            Some(i) => match history.recall(i - 1) {
                Some(cmd) => {
                    self.history_cursor = Some(i - 1);
                    self.editor.set(cmd);
                },
                // History was cleared under the cursor.
                None => self.leave_browsing(),
            },
        }
    }

    fn leave_browsing(&mut self) {
        self.history_cursor = None;
        let draft = std::mem::take(&mut self.draft);
        self.editor.set(draft);
    }

    /// Hand over the buffer and reset all browsing state.
    pub fn submit(&mut self) -> String {
        self.history_cursor = None;
        self.draft.clear();
        self.editor.take()
    }

    /// Insert pasted text at the caret.
    pub fn paste(&mut self, text: &str) {
        self.editor.insert_str(text);
    }

    /// Ordinary caret editing. Returns `false` for keys that are not edits.
    fn edit(&mut self, key: KeyPress) -> bool {
        match key.key {
            Key::Char(c) if !key.modifiers.command() => self.editor.insert(c),
            Key::Backspace => self.editor.backspace(),
            Key::Delete => self.editor.delete(),
            Key::Left => self.editor.move_left(),
            Key::Right => self.editor.move_right(),
            Key::Home => self.editor.home(),
            Key::End => self.editor.end(),
            _ => return false,
        }
        true
    }
}

/// The whole in-memory state of one shell session.
#[derive(Debug, Clone)]
pub struct Session {
    history: HistoryStore,
    input: InputController,
}

impl Session {
    /// Start a session whose history holds the startup banner entry.
    pub fn start(interp: &Interpreter) -> Self {
        let mut history = HistoryStore::new();
        history.push(interp.startup_entry());
        Self {
            history,
            input: InputController::new(),
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn input(&self) -> &InputController {
        &self.input
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyPress, interp: &Interpreter) -> KeyOutcome {
        if key.is_clear_line() {
            self.input.clear_line();
            return KeyOutcome::suppressed();
        }
        match key.key {
            Key::Tab => {
                self.input.complete(interp.registry());
                KeyOutcome::suppressed()
            },
            Key::Enter => {
                let line = self.input.submit();
                interp.execute(&line, &mut self.history);
                KeyOutcome {
                    suppress_default: false,
                    submitted: true,
                }
            },
            Key::Up => {
                self.input.history_prev(&self.history);
                KeyOutcome::suppressed()
            },
            Key::Down => {
                self.input.history_next(&self.history);
                KeyOutcome::suppressed()
            },
            Key::F(n) => match quick_command(interp.registry(), n) {
                Some(name) => {
                    self.run_quick_command(name, interp);
                    KeyOutcome {
                        suppress_default: true,
                        submitted: true,
                    }
                },
                None => KeyOutcome::passthrough(),
            },
            _ => {
                self.input.edit(key);
                KeyOutcome::passthrough()
            },
        }
    }

    /// Handle a front-end event. Returns `None` for [`InputEvent::Quit`].
    pub fn handle_event(&mut self, event: &InputEvent, interp: &Interpreter) -> Option<KeyOutcome> {
        match event {
            InputEvent::Key(key) => Some(self.handle_key(*key, interp)),
            InputEvent::Paste(text) => {
                self.input.paste(text);
                Some(KeyOutcome::passthrough())
            },
            InputEvent::Quit => None,
        }
    }

    /// Run a command by name without touching the input buffer, history
    /// cursor, or draft.
    pub fn run_quick_command(&mut self, name: &str, interp: &Interpreter) {
        interp.execute(name, &mut self.history);
    }
}

/// Name bound to function key `F<n>`: the n-th registered command.
pub fn quick_command(registry: &CommandRegistry, n: u8) -> Option<&str> {
    let idx = usize::from(n).checked_sub(1)?;
    registry.names().get(idx).copied()
}

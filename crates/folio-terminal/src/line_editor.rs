//! Single-line edit buffer with a caret.

/// Text being typed at the prompt. The caret is a character index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEditor {
    text: String,
    caret: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caret position as character index.
    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the whole buffer and put the caret at the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.caret = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.caret = 0;
    }

    /// Empty the buffer, returning what it held.
    pub fn take(&mut self) -> String {
        self.caret = 0;
        std::mem::take(&mut self.text)
    }

    fn byte_pos(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Insert a character at the caret.
    pub fn insert(&mut self, ch: char) {
        let at = self.byte_pos(self.caret);
        self.text.insert(at, ch);
        self.caret += 1;
    }

    /// Insert a string at the caret. Line breaks are dropped.
    pub fn insert_str(&mut self, s: &str) {
        for ch in s.chars().filter(|c| *c != '\n' && *c != '\r') {
            self.insert(ch);
        }
    }

    /// Delete the character before the caret.
    pub fn backspace(&mut self) {
        if self.caret > 0 {
            self.caret -= 1;
            let at = self.byte_pos(self.caret);
            self.text.remove(at);
        }
    }

    /// Delete the character under the caret.
    pub fn delete(&mut self) {
        let at = self.byte_pos(self.caret);
        if at < self.text.len() {
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.caret = (self.caret + 1).min(self.text.chars().count());
    }

    pub fn home(&mut self) {
        self.caret = 0;
    }

    pub fn end(&mut self) {
        self.caret = self.text.chars().count();
    }
}

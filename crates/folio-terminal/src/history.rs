//! Transcript history: the ordered log of submitted commands and their output.

use crate::output::OutputLine;

/// One submitted line and the output it produced. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The line exactly as typed. Empty for the startup banner entry.
    pub raw_command: String,
    pub output: Vec<OutputLine>,
}

impl HistoryEntry {
    pub fn new(raw_command: impl Into<String>, output: Vec<OutputLine>) -> Self {
        Self {
            raw_command: raw_command.into(),
            output,
        }
    }

    /// Whether the entry has a command line to echo.
    pub fn has_command(&self) -> bool {
        !self.raw_command.is_empty()
    }
}

/// Append-only log of history entries, reset only by `clear`.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
    /// Bumped on every reset so observers can tell a clear from an append.
    generation: u64,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Drop every entry.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.generation += 1;
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Number of resets performed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Non-empty submitted commands, oldest first.
    pub fn past_commands(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.has_command())
            .map(|e| e.raw_command.as_str())
            .collect()
    }

    /// The command `index` steps back from the newest (0 = most recent).
    pub fn recall(&self, index: usize) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .filter(|e| e.has_command())
            .nth(index)
            .map(|e| e.raw_command.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(cmds: &[&str]) -> HistoryStore {
        let mut h = HistoryStore::new();
        for c in cmds {
            h.push(HistoryEntry::new(*c, Vec::new()));
        }
        h
    }

    #[test]
    fn new_is_empty() {
        let h = HistoryStore::new();
        assert!(h.is_empty());
        assert_eq!(h.generation(), 0);
        assert!(h.past_commands().is_empty());
    }

    #[test]
    fn push_keeps_order() {
        let h = store(&["help", "about", "projects"]);
        let cmds: Vec<&str> = h.entries().iter().map(|e| e.raw_command.as_str()).collect();
        assert_eq!(cmds, ["help", "about", "projects"]);
    }

    #[test]
    fn past_commands_skip_empty() {
        let h = store(&["", "help", "", "about"]);
        assert_eq!(h.len(), 4);
        assert_eq!(h.past_commands(), ["help", "about"]);
    }

    #[test]
    fn whitespace_command_counts_as_past_command() {
        let h = store(&["  "]);
        assert_eq!(h.past_commands(), ["  "]);
    }

    #[test]
    fn recall_is_most_recent_first() {
        let h = store(&["help", "", "about"]);
        assert_eq!(h.recall(0), Some("about"));
        assert_eq!(h.recall(1), Some("help"));
        assert_eq!(h.recall(2), None);
    }

    #[test]
    fn reset_clears_and_bumps_generation() {
        let mut h = store(&["help", "about"]);
        h.reset();
        assert!(h.is_empty());
        assert_eq!(h.generation(), 1);
        h.reset();
        assert!(h.is_empty());
        assert_eq!(h.generation(), 2);
    }

    #[test]
    fn entries_after_reset_start_fresh() {
        let mut h = store(&["help"]);
        h.reset();
        h.push(HistoryEntry::new("about", Vec::new()));
        assert_eq!(h.past_commands(), ["about"]);
        assert_eq!(h.last().map(|e| e.raw_command.as_str()), Some("about"));
    }
}

//! Typewriter reveal timing for one history entry.
//!
//! Delays only decide when a line becomes visible. Lines are always shown in
//! order, so a line with a short delay behind a line with a long one waits
//! for its predecessor.

use crate::output::OutputLine;

/// Per-line reveal delays for one entry, measured from when it was appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSchedule {
    delays: Vec<u64>,
}

impl RevealSchedule {
    /// Build a schedule; lines without an explicit delay get `index * step_ms`.
    pub fn new(lines: &[OutputLine], step_ms: u64) -> Self {
        let delays = lines
            .iter()
            .enumerate()
            .map(|(i, line)| effective_delay(line, i, step_ms))
            .collect();
        Self { delays }
    }

    /// A schedule that shows everything at once.
    pub fn immediate(len: usize) -> Self {
        Self {
            delays: vec![0; len],
        }
    }

    pub fn delays(&self) -> &[u64] {
        &self.delays
    }

    pub fn len(&self) -> usize {
        self.delays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delays.is_empty()
    }

    /// How many leading lines are visible `elapsed_ms` after the append.
    pub fn visible_count(&self, elapsed_ms: u64) -> usize {
        self.delays
            .iter()
            .position(|d| *d > elapsed_ms)
            .unwrap_or(self.delays.len())
    }

    /// Time at which line `index` actually appears, accounting for lines
    /// ahead of it.
    pub fn shown_at(&self, index: usize) -> Option<u64> {
        self.delays.get(..=index)?.iter().copied().max()
    }

    /// Time at which the whole entry is visible.
    pub fn finished_at(&self) -> u64 {
        self.delays.iter().copied().max().unwrap_or(0)
    }
}

/// Explicit delay if the line has one, else `index * step_ms`.
pub fn effective_delay(line: &OutputLine, index: usize, step_ms: u64) -> u64 {
    line.reveal_delay_ms
        .unwrap_or_else(|| index as u64 * step_ms)
}

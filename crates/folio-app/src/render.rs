//! Transcript renderer: prints history entries and the prompt line.
//!
//! The renderer watches the history store and prints whatever was appended
//! since the last sync. A reset (generation change) clears the screen first.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::cursor::{MoveTo, MoveToColumn};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use folio_terminal::{
    HistoryEntry, HistoryStore, InputController, LineContent, LineKind, LinkBlock, OutputLine,
    RevealSchedule,
};
use folio_types::config::ShellConfig;
use folio_types::content::Identity;

use crate::links::{display_link, social_link};

/// Text rows an output line occupies on screen.
pub fn line_rows(line: &OutputLine) -> Vec<String> {
    match &line.content {
        LineContent::Text(s) => vec![s.clone()],
        LineContent::Links(LinkBlock::Social(entries)) => entries
            .iter()
            .map(|e| {
                let link = social_link(e);
                format!("  {:<12}  {}  <{}>", link.label, link.value, link.url)
            })
            .collect(),
        LineContent::Links(LinkBlock::Projects(projects)) => {
            let mut rows = Vec::new();
            for (i, p) in projects.iter().enumerate() {
                if i > 0 {
                    rows.push(String::new());
                }
                rows.push(format!("  ▸ {}", p.name));
                if !p.description.is_empty() {
                    rows.push(format!("    {}", p.description));
                }
                rows.push(format!("    {}", display_link(&p.link)));
            }
            rows
        },
    }
}

fn kind_color(kind: LineKind) -> Option<Color> {
    match kind {
        LineKind::Text => None,
        LineKind::CommandEcho => Some(Color::White),
        LineKind::Error => Some(Color::Red),
        LineKind::Banner => Some(Color::Green),
        LineKind::LinkBlock => Some(Color::Cyan),
    }
}

fn column(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Prints the transcript to a raw-mode terminal.
pub struct Renderer<W: Write> {
    out: W,
    identity: Identity,
    config: ShellConfig,
    shown: usize,
    generation: u64,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, identity: Identity, config: ShellConfig) -> Self {
        Self {
            out,
            identity,
            config,
            shown: 0,
            generation: 0,
        }
    }

    /// `user@host $ `
    pub fn prompt(&self) -> String {
        format!(
            "{}@{}{}",
            self.identity.username, self.identity.hostname, self.config.prompt_symbol
        )
    }

    /// Print entries appended since the last sync.
    pub fn sync(&mut self, history: &HistoryStore) -> io::Result<()> {
        if history.generation() != self.generation {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
            self.generation = history.generation();
            self.shown = 0;
        }
        queue!(self.out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        let new_entries = history.entries().get(self.shown..).unwrap_or_default();
        for entry in new_entries {
            self.render_entry(entry)?;
        }
        self.shown = history.len();
        self.out.flush()
    }

    fn render_entry(&mut self, entry: &HistoryEntry) -> io::Result<()> {
        if entry.has_command() {
            self.write_prompt()?;
            queue!(self.out, Print(&entry.raw_command), Print("\r\n"))?;
        }

        let schedule = if self.config.typewriter {
            RevealSchedule::new(&entry.output, self.config.reveal_step_ms)
        } else {
            RevealSchedule::immediate(entry.output.len())
        };
        let start = Instant::now();
        for (i, line) in entry.output.iter().enumerate() {
            let due = Duration::from_millis(schedule.shown_at(i).unwrap_or(0));
            let elapsed = start.elapsed();
            if due > elapsed {
                self.out.flush()?;
                thread::sleep(due - elapsed);
            }
            self.write_line(line)?;
        }
        Ok(())
    }

    fn write_line(&mut self, line: &OutputLine) -> io::Result<()> {
        let color = kind_color(line.kind);
        if let Some(c) = color {
            queue!(self.out, SetForegroundColor(c))?;
        }
        for row in line_rows(line) {
            queue!(self.out, Print(row), Print("\r\n"))?;
        }
        if color.is_some() {
            queue!(self.out, ResetColor)?;
        }
        Ok(())
    }

    fn write_prompt(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            SetForegroundColor(Color::Green),
            Print(&self.identity.username),
            ResetColor,
            Print("@"),
            SetForegroundColor(Color::Cyan),
            Print(&self.identity.hostname),
            ResetColor,
            Print(&self.config.prompt_symbol),
        )
    }

    /// Redraw the prompt line with the live buffer and place the caret.
    pub fn draw_prompt(&mut self, input: &InputController) -> io::Result<()> {
        queue!(self.out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        self.write_prompt()?;
        let caret = self.prompt().chars().count() + input.editor().caret();
        queue!(self.out, Print(input.buffer()), MoveToColumn(column(caret)))?;
        self.out.flush()
    }

    /// Leave the cursor on a fresh line.
    pub fn finish(&mut self) -> io::Result<()> {
        queue!(self.out, Print("\r\n"))?;
        self.out.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

//! Command interpreter and session state machine.
//!
//! Commands implement the `Command` trait and are registered by name. The
//! interpreter normalizes a submitted line, resolves it against the registry,
//! and appends the result to the history. A `Session` owns the history and the
//! input controller and turns key presses into state transitions.

mod commands;
mod history;
mod interpreter;
mod line_editor;
mod output;
pub mod reveal;
mod session;

/// Register the built-in commands (help, banner, about, projects, contact, clear).
pub use commands::register_builtins;
/// One submitted line and its output.
pub use history::HistoryEntry;
/// Append-only transcript log.
pub use history::HistoryStore;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (lines or the clear signal).
pub use interpreter::CommandOutput;
/// Registry of available commands.
pub use interpreter::CommandRegistry;
/// Resolves submitted lines into history actions.
pub use interpreter::Interpreter;
/// What a submitted line does to the history.
pub use interpreter::ResolvedAction;
pub use interpreter::{CLEAR_COMMAND, normalize};
/// Caret-aware prompt buffer.
pub use line_editor::LineEditor;
pub use output::{LineContent, LineKind, LinkBlock, OutputLine};
pub use reveal::RevealSchedule;
/// Key-event state machine and session state.
pub use session::{InputController, KeyOutcome, Session, quick_command};

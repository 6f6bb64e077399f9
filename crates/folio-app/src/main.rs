//! folio desktop entry point.
//!
//! Runs the shell in the current terminal. Type a command and press Enter;
//! Tab completes, Up/Down walk the history, Esc or Ctrl+C clears the line,
//! F1-F6 run quick commands, Ctrl+D quits.

mod content_setup;
mod input;
mod links;
mod render;

use std::io;

use anyhow::{Context, Result};
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use folio_terminal::{CommandRegistry, Interpreter, Session, register_builtins};

use render::Renderer;

/// Restores the terminal on drop.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = crossterm::execute!(io::stdout(), DisableBracketedPaste);
        let _ = disable_raw_mode();
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let path = content_setup::content_path(
        std::env::args().nth(1),
        std::env::var("FOLIO_CONTENT").ok(),
    );
    let (content, shell) =
        content_setup::load_content(path.as_deref()).context("failed to load content")?;
    log::info!(
        "Starting folio for {}@{} ({} projects)",
        content.identity.username,
        content.identity.hostname,
        content.projects.len(),
    );

    let mut cmd_reg = CommandRegistry::new();
    register_builtins(&mut cmd_reg, &shell);
    let identity = content.identity.clone();
    let interp = Interpreter::new(cmd_reg, content);
    let mut session = Session::start(&interp);

    enable_raw_mode()?;
    let _guard = TerminalGuard;
    crossterm::execute!(io::stdout(), EnableBracketedPaste)?;

    let mut renderer = Renderer::new(io::stdout(), identity, shell);
    renderer.sync(session.history())?;
    renderer.draw_prompt(session.input())?;

    loop {
        let Some(ev) = input::map_event(&event::read()?) else {
            continue;
        };
        let Some(outcome) = session.handle_event(&ev, &interp) else {
            log::info!("Quit requested");
            break;
        };
        if outcome.submitted {
            renderer.sync(session.history())?;
        }
        renderer.draw_prompt(session.input())?;
    }

    renderer.finish()?;
    Ok(())
}

//! Shell configuration (`[shell]` table of the content document).

use serde::Deserialize;

/// Presentation and timing settings for the shell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShellConfig {
    /// Default reveal increment per output line, in milliseconds.
    #[serde(default = "default_step")]
    pub reveal_step_ms: u64,
    /// Reveal increment between banner lines, in milliseconds.
    #[serde(default = "default_step")]
    pub banner_step_ms: u64,
    /// Text between `user@host` and the typed command.
    #[serde(default = "default_prompt_symbol")]
    pub prompt_symbol: String,
    /// Whether output lines are revealed with their delays.
    #[serde(default = "yes")]
    pub typewriter: bool,
}

fn default_step() -> u64 {
    40
}
fn default_prompt_symbol() -> String {
    " $ ".to_string()
}
fn yes() -> bool {
    true
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            reveal_step_ms: default_step(),
            banner_step_ms: default_step(),
            prompt_symbol: default_prompt_symbol(),
            typewriter: yes(),
        }
    }
}

//! Error types for folio.

use std::io;

/// Errors produced while loading content or driving the terminal.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("content error: {0}")]
    Content(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;

//! Locate and load the content document.

use std::path::{Path, PathBuf};

use folio_types::config::ShellConfig;
use folio_types::content::{self, ContentSource};
use folio_types::error::Result;

/// Content compiled into the binary, used when no document is given.
const DEFAULT_CONTENT: &str = include_str!("../../../content/folio.toml");

/// Pick the content path from the CLI argument or `FOLIO_CONTENT`.
pub fn content_path(arg: Option<String>, env: Option<String>) -> Option<PathBuf> {
    arg.or(env).filter(|s| !s.trim().is_empty()).map(PathBuf::from)
}

/// Load content from `path`, falling back to the built-in document when the
/// path is absent or does not exist. Parse errors are not masked.
pub fn load_content(path: Option<&Path>) -> Result<(ContentSource, ShellConfig)> {
    if let Some(path) = path {
        if path.is_file() {
            return content::load(path);
        }
        log::warn!(
            "Content file '{}' not found -- using built-in content",
            path.display()
        );
    }
    content::parse_toml(DEFAULT_CONTENT)
}

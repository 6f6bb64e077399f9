//! Output lines produced by commands.
//!
//! Lines carry plain content and a kind. How a kind or a link block looks is
//! decided by the renderer; nothing in this crate inspects it.

use folio_types::content::{Project, SocialEntry};

/// Presentation class of an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Text,
    CommandEcho,
    Error,
    Banner,
    LinkBlock,
}

/// Structured payload for a link-block line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkBlock {
    /// Social platform links, in display order.
    Social(Vec<SocialEntry>),
    /// Project cards, in display order.
    Projects(Vec<Project>),
}

/// Content of a single output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineContent {
    Text(String),
    Links(LinkBlock),
}

impl LineContent {
    /// The plain text, or `None` for structured content.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            LineContent::Text(s) => Some(s),
            LineContent::Links(_) => None,
        }
    }
}

/// One line of command output. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub content: LineContent,
    pub kind: LineKind,
    /// Explicit reveal delay; `None` means "index times the default step".
    pub reveal_delay_ms: Option<u64>,
}

impl OutputLine {
    /// A plain text line.
    pub fn text(s: impl Into<String>) -> Self {
        Self::with_kind(LineKind::Text, s)
    }

    /// An error line.
    pub fn error(s: impl Into<String>) -> Self {
        Self::with_kind(LineKind::Error, s)
    }

    /// A banner line revealed after `delay_ms`.
    pub fn banner(s: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            reveal_delay_ms: Some(delay_ms),
            ..Self::with_kind(LineKind::Banner, s)
        }
    }

    /// A link-block line.
    pub fn links(block: LinkBlock) -> Self {
        Self {
            content: LineContent::Links(block),
            kind: LineKind::LinkBlock,
            reveal_delay_ms: None,
        }
    }

    fn with_kind(kind: LineKind, s: impl Into<String>) -> Self {
        Self {
            content: LineContent::Text(s.into()),
            kind,
            reveal_delay_ms: None,
        }
    }
}

//! Static content document: identity, banner art, social links, projects.
//!
//! The document is loaded once before the first render and never mutated.
//! TOML and JSON share one shape:
//!
//! ```toml
//! [identity]
//! username = "guest"
//! hostname = "folio"
//! greeting = "Hello."
//!
//! [content]
//! ascii = ["line one", "line two"]
//!
//! [content.social]
//! github = "someone"
//!
//! [[content.projects]]
//! name = "thing"
//! description = "does stuff"
//! link = "https://example.com"
//! ```

use std::fmt;
use std::path::Path;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::config::ShellConfig;
use crate::error::{FolioError, Result};

/// Who the shell belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Identity {
    pub username: String,
    pub hostname: String,
    #[serde(default)]
    pub greeting: String,
}

/// One social platform entry (`platform = "handle"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialEntry {
    pub platform: String,
    pub handle: String,
}

/// Social links in document order.
///
/// Deserialized from a map; entries keep the order they were written in,
/// which is also the display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SocialLinks(Vec<SocialEntry>);

impl SocialLinks {
    pub fn new(entries: Vec<SocialEntry>) -> Self {
        Self(entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SocialEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Handle registered for a platform, if any.
    pub fn get(&self, platform: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.platform == platform)
            .map(|e| e.handle.as_str())
    }

    pub fn as_slice(&self) -> &[SocialEntry] {
        &self.0
    }
}

impl<'de> Deserialize<'de> for SocialLinks {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = SocialLinks;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of platform names to handles")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<SocialLinks, A::Error> {
                let mut entries: Vec<SocialEntry> = Vec::new();
                while let Some((platform, handle)) = map.next_entry::<String, String>()? {
                    if entries.iter().any(|e| e.platform == platform) {
                        return Err(de::Error::custom(format!(
                            "duplicate social platform: {platform}"
                        )));
                    }
                    entries.push(SocialEntry { platform, handle });
                }
                Ok(SocialLinks(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

/// A project card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub link: String,
}

/// Read-only content consumed by command handlers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentSource {
    pub identity: Identity,
    /// Banner art, one entry per line.
    pub ascii: Vec<String>,
    pub social: SocialLinks,
    pub projects: Vec<Project>,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            username: "guest".to_string(),
            hostname: "folio".to_string(),
            greeting: String::new(),
        }
    }
}

/// The on-disk document: content plus optional shell settings.
#[derive(Debug, Clone, Deserialize)]
struct ContentDocument {
    identity: Identity,
    #[serde(default)]
    content: ContentBody,
    #[serde(default)]
    shell: ShellConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ContentBody {
    #[serde(default)]
    ascii: Vec<String>,
    #[serde(default)]
    social: SocialLinks,
    #[serde(default)]
    projects: Vec<Project>,
}

impl ContentDocument {
    fn into_parts(self) -> Result<(ContentSource, ShellConfig)> {
        if self.identity.username.trim().is_empty() {
            return Err(FolioError::Content("identity.username is empty".to_string()));
        }
        if self.identity.hostname.trim().is_empty() {
            return Err(FolioError::Content("identity.hostname is empty".to_string()));
        }
        let source = ContentSource {
            identity: self.identity,
            ascii: self.content.ascii,
            social: self.content.social,
            projects: self.content.projects,
        };
        Ok((source, self.shell))
    }
}

/// Parse a TOML content document.
pub fn parse_toml(text: &str) -> Result<(ContentSource, ShellConfig)> {
    let doc: ContentDocument = toml::from_str(text)?;
    doc.into_parts()
}

/// Parse a JSON content document.
pub fn parse_json(text: &str) -> Result<(ContentSource, ShellConfig)> {
    let doc: ContentDocument = serde_json::from_str(text)?;
    doc.into_parts()
}

/// Load a content document from disk, choosing the format by extension
/// (`.json` is JSON, anything else TOML).
pub fn load(path: &Path) -> Result<(ContentSource, ShellConfig)> {
    let text = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    log::info!("Loading content from {}", path.display());
    if is_json {
        parse_json(&text)
    } else {
        parse_toml(&text)
    }
}

//! Link targets and labels for link-block lines.

use folio_types::content::SocialEntry;

/// A social entry resolved to something clickable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: String,
    pub value: String,
    pub url: String,
}

/// Resolve a social entry to its URL and display label.
///
/// Unknown platforms link to the raw value and use the platform name as label.
pub fn social_link(entry: &SocialEntry) -> SocialLink {
    let v = &entry.handle;
    let (label, url) = match entry.platform.as_str() {
        "email" => ("✉ EMAIL".to_string(), format!("mailto:{v}")),
        "github" => ("⚡ GITHUB".to_string(), format!("https://github.com/{v}")),
        "linkedin" => ("💼 LINKEDIN".to_string(), format!("https://linkedin.com/in/{v}")),
        "twitter" => ("𝕏 TWITTER".to_string(), format!("https://x.com/{v}")),
        "substack" => ("📝 SUBSTACK".to_string(), format!("https://{v}")),
        other => (other.to_uppercase(), v.clone()),
    };
    SocialLink {
        label,
        value: v.clone(),
        url,
    }
}

/// Project link as displayed: without the `https://` scheme.
pub fn display_link(link: &str) -> &str {
    link.strip_prefix("https://").unwrap_or(link)
}

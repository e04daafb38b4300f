//! Shared types used by both pipeline stages.
//!
//! These are serialized into `manifest.json` by scan and read back by
//! generate, so both sides see the exact same shape.

use serde::{Deserialize, Serialize};

/// A page generated from a markdown file in the content root.
///
/// - Numbered files (`NNN-name.md`) appear in navigation, sorted by number
/// - Unnumbered files are generated but hidden from navigation
///
/// If the file content is just a URL, the page becomes an external link in nav.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Title from first `# heading` in markdown, or link_title as fallback
    pub title: String,
    /// Display label in nav (filename with number stripped and dashes → spaces)
    pub link_title: String,
    /// URL slug (filename stem with number prefix stripped)
    pub slug: String,
    /// Raw markdown content (or URL for link pages)
    pub body: String,
    pub in_nav: bool,
    /// Number prefix, `u32::MAX` when absent
    pub sort_key: u32,
    pub is_link: bool,
    /// Source file, relative to the content root
    pub source: String,
}

/// One entry in the site header navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    /// Absolute site path (`/projects/`) or an external URL.
    pub href: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub external: bool,
}

impl NavItem {
    pub fn internal(title: &str, href: &str) -> Self {
        Self {
            title: title.to_string(),
            href: href.to_string(),
            external: false,
        }
    }
}

/// A named list of technologies: a project's stack group or a skills group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TechGroup {
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
}

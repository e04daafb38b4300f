//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! serialized to a TOML table and the user's file is deep-merged on top, so a
//! config file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! name = "Your Name"
//! title = "Full-Stack Developer & ML Engineer"
//! description = "Building intelligent, accessible, and user-focused digital products."
//! url = ""                      # Canonical base URL, e.g. "https://yourname.dev"
//!
//! [links]                       # Social links shown in hero and footer
//! # github = "https://github.com/you"
//!
//! [contact]
//! # email = "hello@yourname.dev"
//! # location = "Addis Ababa, Ethiopia"
//! # availability = "Available for new opportunities"
//! # form_action = "https://formspree.io/f/xyz"
//!
//! [projects]
//! default_sort = "recent"       # recent | featured | alphabetical
//! tag_preview = 3               # Tags shown on a card before "+N"
//! featured_on_home = 3          # Featured projects on the home page
//!
//! [blog]
//! words_per_minute = 200        # Read-time estimate when a post omits it
//! recent_on_home = 3
//!
//! [theme]
//! content_width = "72rem"
//! card_gap = "1.5rem"
//! radius = "0.75rem"
//!
//! [colors.light]  /  [colors.dark]
//! background, surface, text, text_muted, border, link, link_hover, accent
//!
//! [build]
//! max_threads = 4               # Rendering workers (omit for auto = CPU cores)
//!
//! [[skills]]
//! name = "Frontend"
//! items = ["React", "TypeScript"]
//!
//! [[testimonials]]
//! name = "Sarah Johnson"
//! role = "Senior Frontend Developer"
//! company = "TechCorp"
//! content = "..."
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::query::SortMode;
use crate::types::TechGroup;
use crate::validate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Identity shown in titles, the hero, and the footer.
    pub site: SiteMeta,
    pub links: LinksConfig,
    pub contact: ContactConfig,
    pub projects: ProjectsConfig,
    pub blog: BlogConfig,
    /// Layout sizes injected as CSS custom properties.
    pub theme: ThemeConfig,
    pub colors: ColorConfig,
    pub build: BuildConfig,
    /// Skill groups for the home page, in display order.
    pub skills: Vec<TechGroup>,
    pub testimonials: Vec<Testimonial>,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation("site.name must not be empty".into()));
        }
        if !self.site.url.is_empty()
            && !(self.site.url.starts_with("https://") || self.site.url.starts_with("http://"))
        {
            return Err(ConfigError::Validation(
                "site.url must start with http:// or https://".into(),
            ));
        }
        if let Some(email) = &self.contact.email
            && !validate::is_valid_email(email)
        {
            return Err(ConfigError::Validation(format!(
                "contact.email is not a valid address: {email}"
            )));
        }
        if self.projects.tag_preview == 0 {
            return Err(ConfigError::Validation(
                "projects.tag_preview must be at least 1".into(),
            ));
        }
        if self.blog.words_per_minute == 0 {
            return Err(ConfigError::Validation(
                "blog.words_per_minute must be at least 1".into(),
            ));
        }
        if self.build.max_threads == Some(0) {
            return Err(ConfigError::Validation(
                "build.max_threads must be at least 1 (omit for auto)".into(),
            ));
        }
        Ok(())
    }

    /// Contact email, falling back to `links.email`.
    pub fn contact_email(&self) -> Option<&str> {
        self.contact
            .email
            .as_deref()
            .or(self.links.email.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    pub name: String,
    pub title: String,
    pub description: String,
    /// Canonical base URL without trailing slash. Empty means relative links only.
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            title: "Full-Stack Developer & ML Engineer".to_string(),
            description: "Building intelligent, accessible, and user-focused digital products."
                .to_string(),
            url: String::new(),
            og_image: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinksConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl LinksConfig {
    /// Present social links as `(label, url)` in display order.
    pub fn social(&self) -> Vec<(&'static str, &str)> {
        [
            ("GitHub", self.github.as_deref()),
            ("LinkedIn", self.linkedin.as_deref()),
            ("Twitter", self.twitter.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|u| (label, u)))
        .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    /// Where the contact and newsletter forms post. Without it the contact
    /// form falls back to a `mailto:` action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_action: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectsConfig {
    /// Sort used by `/projects/` and by each category's landing listing.
    pub default_sort: SortMode,
    pub tag_preview: usize,
    pub featured_on_home: usize,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            default_sort: SortMode::Recent,
            tag_preview: crate::catalog::DEFAULT_TAG_PREVIEW,
            featured_on_home: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlogConfig {
    pub words_per_minute: u32,
    pub recent_on_home: usize,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            words_per_minute: 200,
            recent_on_home: 3,
        }
    }
}

/// Rendering parallelism.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_threads: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &BuildConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_threads.map(|n| n.min(cores)).unwrap_or(cores)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Maximum width of the main column (CSS value).
    pub content_width: String,
    /// Gap between project and post cards (CSS value).
    pub card_gap: String,
    /// Corner radius for cards and buttons (CSS value).
    pub radius: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            content_width: "72rem".to_string(),
            card_gap: "1.5rem".to_string(),
            radius: "0.75rem".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    /// Card and header background.
    pub surface: String,
    pub text: String,
    /// Secondary text: dates, captions, counts.
    pub text_muted: String,
    pub border: String,
    pub link: String,
    pub link_hover: String,
    /// Badges, active filter buttons, featured markers.
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#fafafa".to_string(),
            surface: "#ffffff".to_string(),
            text: "#171717".to_string(),
            text_muted: "#525252".to_string(),
            border: "#e5e5e5".to_string(),
            link: "#2563eb".to_string(),
            link_hover: "#1d4ed8".to_string(),
            accent: "#7c3aed".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            surface: "#171717".to_string(),
            text: "#fafafa".to_string(),
            text_muted: "#a3a3a3".to_string(),
            border: "#262626".to_string(),
            link: "#60a5fa".to_string(),
            link_hover: "#93c5fd".to_string(),
            accent: "#a78bfa".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// [`SiteConfig::default`] as a TOML table: the layer `config.toml` is
/// merged onto.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut table), toml::Value::Table(overrides)) => {
            for (key, value) in overrides {
                let merged = match table.remove(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => value,
                };
                table.insert(key, merged);
            }
            toml::Value::Table(table)
        }
        (_, replacement) => replacement,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the content root, over stock defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    if overlay.is_none() {
        tracing::debug!(root = %root.display(), "no config.toml, using stock defaults");
    }
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# devfolio configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
name = "Your Name"
title = "Full-Stack Developer & ML Engineer"
description = "Building intelligent, accessible, and user-focused digital products."
# Canonical base URL without trailing slash; empty keeps links relative.
url = ""
# og_image = "/og.jpg"

# ---------------------------------------------------------------------------
# Social links (hero and footer)
# ---------------------------------------------------------------------------
[links]
# github = "https://github.com/yourusername"
# linkedin = "https://linkedin.com/in/yourusername"
# twitter = "https://twitter.com/yourusername"
# email = "hello@yourname.dev"

# ---------------------------------------------------------------------------
# Contact page
# ---------------------------------------------------------------------------
[contact]
# email = "hello@yourname.dev"
# location = "Addis Ababa, Ethiopia"
# availability = "Available for new opportunities"
# Form endpoint for contact and newsletter forms. Without it the contact
# form opens the visitor's mail client.
# form_action = "https://formspree.io/f/yourform"

# ---------------------------------------------------------------------------
# Project listings
# ---------------------------------------------------------------------------
[projects]
# Sort for /projects/: "recent", "featured" or "alphabetical".
default_sort = "recent"
# Tags shown on a project card before collapsing into "+N".
tag_preview = 3
# Featured projects shown on the home page.
featured_on_home = 3

# ---------------------------------------------------------------------------
# Blog
# ---------------------------------------------------------------------------
[blog]
# Used to estimate read time when a post has no read_time.
words_per_minute = 200
# Latest posts shown on the home page.
recent_on_home = 3

# ---------------------------------------------------------------------------
# Theme / layout
# ---------------------------------------------------------------------------
[theme]
content_width = "72rem"
card_gap = "1.5rem"
radius = "0.75rem"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#fafafa"
surface = "#ffffff"
text = "#171717"
text_muted = "#525252"
border = "#e5e5e5"
link = "#2563eb"
link_hover = "#1d4ed8"
accent = "#7c3aed"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0a0a0a"
surface = "#171717"
text = "#fafafa"
text_muted = "#a3a3a3"
border = "#262626"
link = "#60a5fa"
link_hover = "#93c5fd"
accent = "#a78bfa"

# ---------------------------------------------------------------------------
# Build
# ---------------------------------------------------------------------------
[build]
# Maximum parallel rendering workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_threads = 4

# ---------------------------------------------------------------------------
# Home page sections (repeat the table for each entry)
# ---------------------------------------------------------------------------
# [[skills]]
# name = "Frontend"
# items = ["Next.js", "React", "TypeScript"]
#
# [[testimonials]]
# name = "Sarah Johnson"
# role = "Senior Frontend Developer"
# company = "TechCorp"
# content = "A pleasure to work with."
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        ":root {{\n{}}}\n\n@media (prefers-color-scheme: dark) {{\n    :root {{\n{}    }}\n}}",
        color_variables(&colors.light, "    "),
        color_variables(&colors.dark, "        "),
    )
}

fn color_variables(scheme: &ColorScheme, indent: &str) -> String {
    [
        ("bg", &scheme.background),
        ("surface", &scheme.surface),
        ("text", &scheme.text),
        ("text-muted", &scheme.text_muted),
        ("border", &scheme.border),
        ("link", &scheme.link),
        ("link-hover", &scheme.link_hover),
        ("accent", &scheme.accent),
    ]
    .iter()
    .map(|(name, value)| format!("{indent}--color-{name}: {value};\n"))
    .collect()
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --content-width: {content_width};
    --card-gap: {card_gap};
    --radius: {radius};
}}"#,
        content_width = theme.content_width,
        card_gap = theme.card_gap,
        radius = theme.radius,
    )
}

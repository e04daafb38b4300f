//! The project catalog: static records loaded from `projects.toml`.
//!
//! The catalog is hand-authored configuration data. It is read once per
//! process, validated, and never mutated afterwards; every view of it (the
//! listing pages, the CLI query, the JSON export) borrows from the same
//! `Vec<ProjectRecord>`.
//!
//! ## File Format
//!
//! ```toml
//! [[project]]
//! id = "nutri-focus"
//! title = "Nutri Focus"
//! description = "AI-powered nutrition recommendations."
//! tags = ["Next.js", "NestJS", "FastAPI"]
//! category = "fullstack"          # fullstack | frontend | backend | ml
//! featured = true
//! year = 2024
//! live_url = "https://nutri-focus.example"
//! github_url = "https://github.com/me/nutri-focus"
//!
//! [[project.tech_stack]]
//! name = "frontend"
//! items = ["Next.js 15", "Tailwind CSS"]
//! ```
//!
//! Everything below `year` is optional. Unknown keys are rejected, and so is
//! any category outside the fixed set.

use crate::types::TechGroup;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Name of the catalog file in the content root.
pub const CATALOG_FILE: &str = "projects.toml";

/// Number of tags shown on a project card before collapsing into `+N`.
pub const DEFAULT_TAG_PREVIEW: usize = 3;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error in projects.toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Duplicate project id: {0}")]
    DuplicateId(String),
    #[error("Invalid project id {0:?}: use letters, digits, '-' or '_'")]
    InvalidId(String),
    #[error("Project {id} has implausible year {year}")]
    ImplausibleYear { id: String, year: i32 },
}

/// Fixed project classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fullstack,
    Frontend,
    Backend,
    Ml,
}

impl Category {
    /// Display order used by filter buttons and counts.
    pub const ALL: [Category; 4] = [
        Category::Fullstack,
        Category::Frontend,
        Category::Backend,
        Category::Ml,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Fullstack => "fullstack",
            Category::Frontend => "frontend",
            Category::Backend => "backend",
            Category::Ml => "ml",
        }
    }

    /// Human label for buttons and badges.
    pub fn label(self) -> &'static str {
        match self {
            Category::Fullstack => "Full Stack",
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
            Category::Ml => "Machine Learning",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown category {s:?} (expected fullstack, frontend, backend or ml)")
            })
    }
}

/// One project entry in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectRecord {
    /// Unique, URL-safe identifier; also the detail page slug.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Ordered; searched case-insensitively, previewed as first N + overflow.
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: Category,
    #[serde(default)]
    pub featured: bool,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// Cover image path, relative to the site root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub challenges: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub solutions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tech_stack: Vec<TechGroup>,
}

impl ProjectRecord {
    pub fn has_details(&self) -> bool {
        !self.challenges.is_empty()
            || !self.solutions.is_empty()
            || !self.results.is_empty()
            || !self.tech_stack.is_empty()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default, rename = "project")]
    projects: Vec<ProjectRecord>,
}

/// Parse catalog TOML text. Does not validate cross-record invariants.
pub fn parse_catalog(content: &str) -> Result<Vec<ProjectRecord>, CatalogError> {
    let file: CatalogFile = toml::from_str(content)?;
    Ok(file.projects)
}

/// Load and validate `projects.toml` from the content root.
///
/// A missing file is an empty catalog, not an error: a site with no projects
/// still renders its listing page with the empty state.
pub fn load_catalog(root: &Path) -> Result<Vec<ProjectRecord>, CatalogError> {
    let path = root.join(CATALOG_FILE);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no catalog file, using empty catalog");
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(&path)?;
    let projects = parse_catalog(&content)?;
    validate_catalog(&projects)?;
    tracing::debug!(count = projects.len(), "loaded project catalog");
    Ok(projects)
}

/// Check the collection-level invariants: unique URL-safe ids, 4-digit years.
pub fn validate_catalog(projects: &[ProjectRecord]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for project in projects {
        if project.id.is_empty()
            || !project
                .id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(CatalogError::InvalidId(project.id.clone()));
        }
        if !seen.insert(project.id.as_str()) {
            return Err(CatalogError::DuplicateId(project.id.clone()));
        }
        if !(1000..=9999).contains(&project.year) {
            return Err(CatalogError::ImplausibleYear {
                id: project.id.clone(),
                year: project.year,
            });
        }
    }
    Ok(())
}

/// Tags split for card display: the first few, plus how many were hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagPreview<'a> {
    pub shown: &'a [String],
    pub overflow: usize,
}

pub fn tag_preview(tags: &[String], limit: usize) -> TagPreview<'_> {
    let cut = limit.min(tags.len());
    TagPreview {
        shown: &tags[..cut],
        overflow: tags.len() - cut,
    }
}

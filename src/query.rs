//! Catalog query engine: category filter, free-text search, stable sorts, and
//! the aggregate counts shown above the project grid.
//!
//! Everything here is a pure function of its inputs. The catalog is borrowed,
//! never reordered in place: each call builds a fresh `Vec<&ProjectRecord>`,
//! so the same records can back any number of listing pages in one build.
//!
//! ```text
//! records ──► category filter ──► search filter ──► stable sort ──► Vec<&ProjectRecord>
//! ```
//!
//! ## Sort Modes
//!
//! | Mode | Order | Ties |
//! |------|-------|------|
//! | `recent` | `year` descending | catalog order |
//! | `featured` | featured first | catalog order within each group |
//! | `alphabetical` | `title` ascending, [`locale_cmp`] | catalog order |
//!
//! All three use `slice::sort_by`, which is stable; catalog order is the
//! tie-break in every mode.

use crate::catalog::{Category, ProjectRecord};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Category restriction for a listing: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter buttons in display order.
    pub const ALL: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Fullstack),
        CategoryFilter::Only(Category::Frontend),
        CategoryFilter::Only(Category::Backend),
        CategoryFilter::Only(Category::Ml),
    ];

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Projects",
            CategoryFilter::Only(c) => c.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>()
            .map(CategoryFilter::Only)
            .map_err(|_| {
                format!(
                    "unknown category filter {s:?} (expected all, fullstack, frontend, backend or ml)"
                )
            })
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Recent,
    Featured,
    Alphabetical,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Recent, SortMode::Featured, SortMode::Alphabetical];

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Recent => "recent",
            SortMode::Featured => "featured",
            SortMode::Alphabetical => "alphabetical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Recent => "Most Recent",
            SortMode::Featured => "Featured First",
            SortMode::Alphabetical => "A-Z",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown sort mode {s:?} (expected recent, featured or alphabetical)")
            })
    }
}

/// Ephemeral query inputs: one listing view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub category: CategoryFilter,
    pub search: String,
    pub sort: SortMode,
}

impl QueryState {
    pub fn new(category: CategoryFilter, sort: SortMode) -> Self {
        Self {
            category,
            search: String::new(),
            sort,
        }
    }

    pub fn apply<'a>(&self, records: &'a [ProjectRecord]) -> Vec<&'a ProjectRecord> {
        query(records, self.category, &self.search, self.sort)
    }
}

/// Filter, search, and sort the catalog.
///
/// Absence of matches is an empty vector, never an error.
pub fn query<'a>(
    records: &'a [ProjectRecord],
    category: CategoryFilter,
    search: &str,
    sort: SortMode,
) -> Vec<&'a ProjectRecord> {
    let needle = search.to_lowercase();
    let mut results: Vec<&ProjectRecord> = records
        .iter()
        .filter(|r| category.matches(r.category))
        .filter(|r| needle.is_empty() || matches_search(r, &needle))
        .collect();
    sort_records(&mut results, sort);
    results
}

/// Whether `needle` (already lowercased) occurs in the title, the
/// description, or any tag.
pub fn matches_search(record: &ProjectRecord, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
        || record
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

fn sort_records(results: &mut [&ProjectRecord], sort: SortMode) {
    match sort {
        SortMode::Recent => results.sort_by(|a, b| b.year.cmp(&a.year)),
        SortMode::Featured => results.sort_by_key(|r| !r.featured),
        SortMode::Alphabetical => results.sort_by(|a, b| locale_cmp(&a.title, &b.title)),
    }
}

/// Locale-style string ordering for display titles.
///
/// Four levels, each consulted only on a tie at the previous one:
/// 1. base letters, with accents stripped and case folded (`"Élan" < "Zebra"`)
/// 2. accents, unaccented first (`"resume" < "résumé"`)
/// 3. lowercase before uppercase at the first differing position (`"devlink" < "DevLink"`)
/// 4. raw code points, so distinct strings never compare equal
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| accent_key(a).cmp(accent_key(b)))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

fn primary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accent_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Query with the extra exact-year restriction accepted by the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub category: CategoryFilter,
    pub year: Option<i32>,
    pub search: String,
}

impl ProjectFilter {
    pub fn apply<'a>(&self, records: &'a [ProjectRecord], sort: SortMode) -> Vec<&'a ProjectRecord> {
        let mut results = query(records, self.category, &self.search, sort);
        if let Some(year) = self.year {
            results.retain(|r| r.year == year);
        }
        results
    }
}

/// Headline counts over the whole catalog, independent of any query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub featured: usize,
    pub this_year: usize,
    pub live: usize,
}

impl CatalogStats {
    pub fn compute(records: &[ProjectRecord], current_year: i32) -> Self {
        Self {
            total: records.len(),
            featured: records.iter().filter(|r| r.featured).count(),
            this_year: records.iter().filter(|r| r.year == current_year).count(),
            live: records.iter().filter(|r| r.live_url.is_some()).count(),
        }
    }

    /// Compute against the local wall-clock year.
    pub fn now(records: &[ProjectRecord]) -> Self {
        Self::compute(records, current_year())
    }
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Per-filter totals over the whole catalog, in button order.
pub fn category_counts(records: &[ProjectRecord]) -> Vec<(CategoryFilter, usize)> {
    CategoryFilter::ALL
        .into_iter()
        .map(|filter| {
            let count = records.iter().filter(|r| filter.matches(r.category)).count();
            (filter, count)
        })
        .collect()
}

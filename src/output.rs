//! CLI output formatting for all pipeline stages and catalog commands.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Every entity
//! (project, post, page) leads with its positional index and title; source
//! files and output paths are secondary context on indented lines.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Projects
//! 001 NutriFocus (fullstack, 2024, featured)
//! 002 DevLink (fullstack, 2024)
//!
//! Blog
//! 001 Static Sites in Rust (2024-03-02)
//!     Source: blog/rust-static-sites.md
//!
//! Pages
//! 001 About Ada
//!     Source: 010-about.md
//!
//! Config
//!     config.toml
//!     projects.toml
//!     assets/
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! Projects → projects/index.html (15 listings)
//!     001 NutriFocus → projects/nutri-focus/index.html
//! Blog → blog/index.html
//!     001 Static Sites in Rust → blog/rust-static-sites/index.html
//! Contact → contact.html
//!
//! Pages
//! 001 About Ada → about.html
//!
//! Generated 24 pages (5 projects, 2 posts), style-1a2b3c4d.css
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::catalog::{CATALOG_FILE, ProjectRecord};
use crate::config::CONFIG_FILE;
use crate::generate::GenerateReport;
use crate::query::{CatalogStats, CategoryFilter};
use crate::scan::{ASSETS_DIR, Manifest};
use crate::submit::Receipt;
use crate::validate::ValidationErrors;
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

/// `001 NutriFocus (fullstack, 2024, featured)`
fn project_line(index: usize, project: &ProjectRecord) -> String {
    let featured = if project.featured { ", featured" } else { "" };
    format!(
        "{} {} ({}, {}{})",
        format_index(index),
        project.title,
        project.category,
        project.year,
        featured
    )
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output: the content inventory.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Projects".to_string());
    if manifest.projects.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, project) in manifest.projects.iter().enumerate() {
        lines.push(project_line(i + 1, project));
    }

    lines.push(String::new());
    lines.push("Blog".to_string());
    if manifest.posts.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, post) in manifest.posts.iter().enumerate() {
        lines.push(format!("{} {} ({})", format_index(i + 1), post.title, post.date));
        lines.push(format!("    Source: {}", post.source));
    }

    if !manifest.pages.is_empty() {
        lines.push(String::new());
        lines.push("Pages".to_string());
        for (i, page) in manifest.pages.iter().enumerate() {
            let link_marker = if page.is_link { " (link)" } else { "" };
            let hidden_marker = if page.in_nav { "" } else { " (hidden)" };
            lines.push(format!(
                "{} {}{}{}",
                format_index(i + 1),
                page.title,
                link_marker,
                hidden_marker
            ));
            lines.push(format!("    Source: {}", page.source));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    for file in [CONFIG_FILE, CATALOG_FILE] {
        if source_root.join(file).exists() {
            lines.push(format!("    {file}"));
        }
    }
    if manifest.has_assets {
        lines.push(format!("    {ASSETS_DIR}/"));
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate stage output: each entity with `→` and its output path.
pub fn format_generate_output(manifest: &Manifest, report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();
    let listings = report
        .pages
        .iter()
        .filter(|p| p.starts_with("projects/") && p.matches('/').count() == 3)
        .count();

    lines.push("Home \u{2192} index.html".to_string());
    lines.push(format!(
        "Projects \u{2192} projects/index.html ({listings} listings)"
    ));
    for (i, project) in manifest.projects.iter().enumerate() {
        lines.push(format!(
            "    {} {} \u{2192} projects/{}/index.html",
            format_index(i + 1),
            project.title,
            project.id
        ));
    }
    lines.push("Blog \u{2192} blog/index.html".to_string());
    for (i, post) in manifest.posts.iter().enumerate() {
        lines.push(format!(
            "    {} {} \u{2192} blog/{}/index.html",
            format_index(i + 1),
            post.title,
            post.slug
        ));
    }
    lines.push("Contact \u{2192} contact.html".to_string());

    if !manifest.pages.is_empty() {
        lines.push(String::new());
        lines.push("Pages".to_string());
        for (i, page) in manifest.pages.iter().enumerate() {
            if page.is_link {
                lines.push(format!(
                    "{} {} \u{2192} (external link)",
                    format_index(i + 1),
                    page.title
                ));
            } else {
                lines.push(format!(
                    "{} {} \u{2192} {}.html",
                    format_index(i + 1),
                    page.title,
                    page.slug
                ));
            }
        }
    }

    lines.push(String::new());
    let mut summary = format!(
        "Generated {} pages ({} projects, {} posts), {}",
        report.pages.len(),
        manifest.projects.len(),
        manifest.posts.len(),
        report.stylesheet
    );
    if report.assets_copied > 0 {
        summary.push_str(&format!(", {} assets", report.assets_copied));
    }
    lines.push(summary);

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(manifest: &Manifest, report: &GenerateReport) {
    for line in format_generate_output(manifest, report) {
        println!("{}", line);
    }
}

// ============================================================================
// Catalog commands
// ============================================================================

/// Query results as an indexed list with a short description line.
pub fn format_query_output(results: &[&ProjectRecord]) -> Vec<String> {
    if results.is_empty() {
        return vec![
            "No projects found".to_string(),
            "    Try adjusting your search or filter criteria.".to_string(),
        ];
    }
    let mut lines = Vec::new();
    for (i, project) in results.iter().enumerate() {
        lines.push(project_line(i + 1, project));
        if !project.description.is_empty() {
            lines.push(format!("    {}", truncate_desc(&project.description, 60)));
        }
        if let Some(url) = &project.live_url {
            lines.push(format!("    Live: {url}"));
        }
    }
    lines
}

pub fn print_query_output(results: &[&ProjectRecord]) {
    for line in format_query_output(results) {
        println!("{}", line);
    }
}

pub fn format_stats_output(stats: &CatalogStats, counts: &[(CategoryFilter, usize)]) -> Vec<String> {
    let mut lines = vec![
        format!("Total Projects  {}", stats.total),
        format!("Featured        {}", stats.featured),
        format!("This Year       {}", stats.this_year),
        format!("Live Projects   {}", stats.live),
        String::new(),
        "Categories".to_string(),
    ];
    for (filter, count) in counts {
        lines.push(format!("    {:<18}{}", filter.label(), count));
    }
    lines
}

pub fn print_stats_output(stats: &CatalogStats, counts: &[(CategoryFilter, usize)]) {
    for line in format_stats_output(stats, counts) {
        println!("{}", line);
    }
}

// ============================================================================
// Form commands
// ============================================================================

/// One `field: message` line per failed check.
pub fn format_validation_errors(errors: &ValidationErrors) -> Vec<String> {
    errors
        .0
        .iter()
        .map(|e| format!("    {}: {}", e.field, e.message))
        .collect()
}

pub fn format_receipt(receipt: &Receipt) -> String {
    format!(
        "{} submitted ({:.1}s, simulated)",
        receipt.form,
        receipt.elapsed.as_secs_f64()
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::generate::generate_site;
    use crate::query::category_counts;
    use crate::scan::scan;
    use crate::submit::FormKind;
    use crate::test_helpers::*;
    use crate::validate::FieldError;
    use std::time::Duration;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn truncate_desc_short() {
        assert_eq!(truncate_desc("Short text", 40), "Short text");
    }

    #[test]
    fn truncate_desc_long() {
        let text = "a".repeat(50);
        assert_eq!(truncate_desc(&text, 40), format!("{}...", "a".repeat(40)));
    }

    #[test]
    fn truncate_desc_counts_characters() {
        assert_eq!(truncate_desc("éééé", 2), "éé...");
    }

    #[test]
    fn project_line_marks_featured() {
        let mut p = project("nf", "NutriFocus", Category::Fullstack, 2024);
        assert_eq!(project_line(1, &p), "001 NutriFocus (fullstack, 2024)");
        p.featured = true;
        assert_eq!(project_line(1, &p), "001 NutriFocus (fullstack, 2024, featured)");
    }

    #[test]
    fn scan_output_sections() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        let lines = format_scan_output(&manifest, tmp.path());

        assert_eq!(lines[0], "Projects");
        assert!(lines.contains(&"001 Nutri Focus (fullstack, 2024, featured)".to_string()));
        assert!(lines.contains(&"001 Static Sites in Rust (2024-03-02)".to_string()));
        assert!(lines.contains(&"    Source: blog/rust-static-sites.md".to_string()));
        assert!(lines.contains(&"    Source: 010-about.md".to_string()));
        assert!(lines.contains(&"    Source: uses.md".to_string()));
        assert!(lines.iter().any(|l| l.ends_with("GitHub (link)")));
        assert!(lines.iter().any(|l| l.ends_with("Uses (hidden)")));
        assert!(lines.contains(&"    config.toml".to_string()));
        assert!(lines.contains(&"    projects.toml".to_string()));
        assert!(lines.contains(&"    assets/".to_string()));
    }

    #[test]
    fn generate_output_lists_paths_and_summary() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        let out = tempfile::TempDir::new().unwrap();
        let report = generate_site(&manifest, tmp.path(), out.path()).unwrap();
        let lines = format_generate_output(&manifest, &report);

        assert_eq!(lines[0], "Home \u{2192} index.html");
        assert_eq!(lines[1], "Projects \u{2192} projects/index.html (15 listings)");
        assert!(lines.contains(
            &"    001 Nutri Focus \u{2192} projects/nutri-focus/index.html".to_string()
        ));
        assert!(lines.iter().any(|l| l.ends_with("\u{2192} about.html")));
        assert!(lines.iter().any(|l| l.ends_with("(external link)")));
        let summary = lines.last().unwrap();
        assert!(summary.starts_with("Generated "));
        assert!(summary.contains("(5 projects, 2 posts)"));
        assert!(summary.ends_with(", 1 assets"));
    }

    #[test]
    fn query_output_empty_state() {
        let lines = format_query_output(&[]);
        assert_eq!(lines[0], "No projects found");
    }

    #[test]
    fn query_output_shows_description_and_live_url() {
        let mut p = project("nf", "NutriFocus", Category::Fullstack, 2024);
        p.description = "AI nutrition tracking".to_string();
        p.live_url = Some("https://nutri.example".to_string());
        let lines = format_query_output(&[&p]);
        assert_eq!(
            lines,
            vec![
                "001 NutriFocus (fullstack, 2024)",
                "    AI nutrition tracking",
                "    Live: https://nutri.example",
            ]
        );
    }

    #[test]
    fn stats_output_includes_category_counts() {
        let records = vec![
            project("a", "A", Category::Ml, 2024),
            project("b", "B", Category::Ml, 2023),
        ];
        let stats = CatalogStats::compute(&records, 2024);
        let lines = format_stats_output(&stats, &category_counts(&records));
        assert_eq!(lines[0], "Total Projects  2");
        assert_eq!(lines[2], "This Year       1");
        assert!(lines.contains(&format!("    {:<18}{}", "Machine Learning", 2)));
        assert!(lines.contains(&format!("    {:<18}{}", "Backend", 0)));
    }

    #[test]
    fn validation_errors_one_line_per_field() {
        let errors = ValidationErrors(vec![
            FieldError {
                field: "name",
                message: "Name must be at least 2 characters".to_string(),
            },
            FieldError {
                field: "email",
                message: "Please enter a valid email address".to_string(),
            },
        ]);
        assert_eq!(
            format_validation_errors(&errors),
            vec![
                "    name: Name must be at least 2 characters",
                "    email: Please enter a valid email address",
            ]
        );
    }

    #[test]
    fn receipt_line() {
        let receipt = Receipt {
            form: FormKind::Contact,
            elapsed: Duration::from_millis(2000),
        };
        assert!(format_receipt(&receipt).ends_with("submitted (2.0s, simulated)"));
    }
}

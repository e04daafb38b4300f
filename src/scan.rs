//! Content scanning and manifest generation.
//!
//! Stage 1 of the build pipeline. Reads the content directory and produces a
//! [`Manifest`] that the generate stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── projects.toml                # Project catalog (optional)
//! ├── 010-about.md                 # Page (numbered = appears in nav)
//! ├── 050-github.md                # External link page (URL-only content)
//! ├── uses.md                      # Unnumbered = generated, hidden from nav
//! ├── blog/
//! │   ├── building-nutri-focus.md  # Post with +++ front matter
//! │   └── nextjs-15-love.md
//! └── assets/                      # Copied verbatim to the output root
//! ```
//!
//! ## Output
//!
//! Produces a [`Manifest`] containing:
//! - Navigation (Home, numbered pages, Projects, Blog, Contact, external links)
//! - Pages from root markdown files
//! - The validated project catalog
//! - Blog posts, newest first
//! - Site configuration
//!
//! ## Validation
//!
//! The scanner rejects:
//! - invalid `config.toml` (unknown keys, out-of-range values)
//! - catalog invariant violations (duplicate ids, implausible years)
//! - blog posts failing the blog-post schema
//! - page slugs that collide with each other or with generated routes

use crate::blog::{self, BlogPost};
use crate::catalog::{self, ProjectRecord};
use crate::config::{self, SiteConfig};
use crate::naming;
use crate::types::{NavItem, Page};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory under the content root copied verbatim into the output.
pub const ASSETS_DIR: &str = "assets";

/// Page slugs that would shadow generated routes.
const RESERVED_SLUGS: &[&str] = &["index", "contact", "projects", "blog", ASSETS_DIR];

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    #[error("Blog error: {0}")]
    Blog(#[from] blog::BlogError),
    #[error("Two pages share the slug {0:?}")]
    DuplicatePageSlug(String),
    #[error("Page {0} uses a reserved slug")]
    ReservedSlug(PathBuf),
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub navigation: Vec<NavItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<Page>,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
    /// Whether `content/assets/` exists and should be copied.
    #[serde(default)]
    pub has_assets: bool,
    pub config: SiteConfig,
}

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let _span = tracing::info_span!("scan", root = %root.display()).entered();

    // Load site config (uses defaults if config.toml doesn't exist)
    let config = config::load_config(root)?;
    let projects = catalog::load_catalog(root)?;
    let posts = blog::load_posts(root, config.blog.words_per_minute)?;
    let pages = parse_pages(root)?;
    let navigation = build_navigation(&pages);
    let has_assets = root.join(ASSETS_DIR).is_dir();

    tracing::info!(
        projects = projects.len(),
        posts = posts.len(),
        pages = pages.len(),
        "scan complete"
    );

    Ok(Manifest {
        navigation,
        pages,
        projects,
        posts,
        has_assets,
        config,
    })
}

/// Parse all markdown files in the root directory into pages.
///
/// Numbered files (`NNN-name.md`) appear in navigation sorted by number;
/// unnumbered files are generated but hidden. A file whose only content is a
/// URL becomes an external link.
fn parse_pages(root: &Path) -> Result<Vec<Page>, ScanError> {
    let mut md_files: Vec<PathBuf> = fs::read_dir(root)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case("md"))
                    .unwrap_or(false)
        })
        .collect();

    md_files.sort();

    let mut pages = Vec::new();
    let mut slugs = HashSet::new();
    for md_path in &md_files {
        let stem = md_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let parsed = naming::parse_stem(&stem);

        let content = fs::read_to_string(md_path)?;
        let trimmed = content.trim();

        // A page whose only content is a URL becomes an external link
        let is_link = !trimmed.contains('\n')
            && (trimmed.starts_with("http://") || trimmed.starts_with("https://"));

        if !is_link {
            if parsed.slug.is_empty() || RESERVED_SLUGS.contains(&parsed.slug.as_str()) {
                let rel = md_path.strip_prefix(root).unwrap_or(md_path);
                return Err(ScanError::ReservedSlug(rel.to_path_buf()));
            }
            if !slugs.insert(parsed.slug.clone()) {
                return Err(ScanError::DuplicatePageSlug(parsed.slug));
            }
        }

        let title = if is_link {
            parsed.display_title.clone()
        } else {
            content
                .lines()
                .find(|line| line.starts_with("# "))
                .map(|line| line.trim_start_matches("# ").trim().to_string())
                .unwrap_or_else(|| parsed.display_title.clone())
        };

        let source = md_path
            .strip_prefix(root)
            .unwrap_or(md_path)
            .to_string_lossy()
            .to_string();
        pages.push(Page {
            title,
            link_title: parsed.display_title.clone(),
            in_nav: parsed.number.is_some(),
            sort_key: parsed.sort_key(),
            slug: parsed.slug,
            body: if is_link {
                trimmed.to_string()
            } else {
                content
            },
            is_link,
            source,
        });
    }

    pages.sort_by_key(|p| p.sort_key);
    Ok(pages)
}

/// Header navigation: Home, numbered content pages, the three generated
/// sections, then numbered external links.
pub fn build_navigation(pages: &[Page]) -> Vec<NavItem> {
    let mut nav = vec![NavItem::internal("Home", "/")];
    nav.extend(
        pages
            .iter()
            .filter(|p| p.in_nav && !p.is_link)
            .map(|p| NavItem::internal(&p.link_title, &format!("/{}.html", p.slug))),
    );
    nav.push(NavItem::internal("Projects", "/projects/"));
    nav.push(NavItem::internal("Blog", "/blog/"));
    nav.push(NavItem::internal("Contact", "/contact.html"));
    nav.extend(
        pages
            .iter()
            .filter(|p| p.in_nav && p.is_link)
            .map(|p| NavItem {
                title: p.link_title.clone(),
                href: p.body.clone(),
                external: true,
            }),
    );
    nav
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn scan_fixture_site() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();

        assert_eq!(manifest.config.site.name, "Ada Example");
        assert_eq!(manifest.projects.len(), 5);
        assert_eq!(manifest.posts.len(), 2);
        assert!(manifest.has_assets);
    }

    #[test]
    fn navigation_order() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        assert_eq!(
            nav_titles(&manifest),
            vec!["Home", "about", "Projects", "Blog", "Contact", "GitHub"]
        );
    }

    #[test]
    fn link_page_becomes_external_nav_item() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        let github = manifest.navigation.last().unwrap();
        assert!(github.external);
        assert_eq!(github.href, "https://github.com/ada-example");
        assert!(find_page(&manifest, "GitHub").is_link);
    }

    #[test]
    fn unnumbered_page_hidden_from_nav() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        let uses = find_page(&manifest, "uses");
        assert!(!uses.in_nav);
        assert_eq!(uses.title, "Uses");
        assert!(!nav_titles(&manifest).contains(&"uses"));
    }

    #[test]
    fn page_title_from_heading() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        let about = find_page(&manifest, "about");
        assert_eq!(about.title, "About Ada");
        assert_eq!(about.link_title, "about");
    }

    #[test]
    fn page_keeps_source_file_name() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        assert_eq!(find_page(&manifest, "about").source, "010-about.md");
        assert_eq!(find_page(&manifest, "uses").source, "uses.md");
    }

    #[test]
    fn posts_are_newest_first() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        let slugs: Vec<&str> = manifest.posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["rust-static-sites", "microservices-lessons"]);
    }

    #[test]
    fn empty_directory_scans_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let manifest = scan(tmp.path()).unwrap();
        assert!(manifest.projects.is_empty());
        assert!(manifest.posts.is_empty());
        assert!(!manifest.has_assets);
        assert_eq!(
            nav_titles(&manifest),
            vec!["Home", "Projects", "Blog", "Contact"]
        );
    }

    #[test]
    fn reserved_page_slug_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("020-contact.md"), "# Contact me").unwrap();
        assert!(matches!(scan(tmp.path()), Err(ScanError::ReservedSlug(_))));
    }

    #[test]
    fn duplicate_page_slug_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("010-about.md"), "# About").unwrap();
        fs::write(tmp.path().join("about.md"), "# About again").unwrap();
        assert!(matches!(
            scan(tmp.path()),
            Err(ScanError::DuplicatePageSlug(_))
        ));
    }

    #[test]
    fn invalid_catalog_fails_scan() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("projects.toml"),
            "[[project]]\nid = \"a\"\ntitle = \"A\"\ndescription = \"A\"\ncategory = \"ml\"\nyear = 99\n",
        )
        .unwrap();
        assert!(matches!(scan(tmp.path()), Err(ScanError::Catalog(_))));
    }

    #[test]
    fn manifest_roundtrips_through_json() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        let json = serde_json::to_string_pretty(&manifest).unwrap();
        let back: Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.projects, manifest.projects);
        assert_eq!(back.posts, manifest.posts);
        assert_eq!(back.navigation, manifest.navigation);
    }
}

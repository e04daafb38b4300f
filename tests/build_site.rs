//! End-to-end: scan the fixture content, write the manifest, generate the
//! site from it, and check the result the way a visitor would see it.

use devfolio::{generate, scan};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

fn copy_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    for entry in WalkDir::new(&fixtures) {
        let entry = entry.unwrap();
        let target = tmp.path().join(entry.path().strip_prefix(&fixtures).unwrap());
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
    tmp
}

struct Built {
    _content: TempDir,
    _temp: TempDir,
    dist: TempDir,
    report: generate::GenerateReport,
}

fn build() -> Built {
    let content = copy_fixtures();
    let temp = TempDir::new().unwrap();
    let dist = TempDir::new().unwrap();

    let manifest = scan::scan(content.path()).unwrap();
    let manifest_path = temp.path().join("manifest.json");
    fs::write(&manifest_path, serde_json::to_string_pretty(&manifest).unwrap()).unwrap();

    let report = generate::generate(&manifest_path, content.path(), dist.path()).unwrap();
    Built {
        _content: content,
        _temp: temp,
        dist,
        report,
    }
}

fn read(dist: &Path, rel: &str) -> String {
    fs::read_to_string(dist.join(rel)).unwrap_or_else(|e| panic!("{rel}: {e}"))
}

/// Site-relative `href` values in one HTML document.
fn internal_hrefs(html: &str) -> Vec<String> {
    html.split("href=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .filter(|href| href.starts_with('/') && !href.starts_with("//"))
        .map(str::to_string)
        .collect()
}

#[test]
fn every_internal_link_resolves() {
    let built = build();
    let dist = built.dist.path();
    for page in &built.report.pages {
        let html = read(dist, page);
        for href in internal_hrefs(&html) {
            let mut rel = href.trim_start_matches('/').to_string();
            if rel.is_empty() || rel.ends_with('/') {
                rel.push_str("index.html");
            }
            assert!(
                dist.join(&rel).is_file(),
                "{page} links to {href}, which was not generated"
            );
        }
    }
}

#[test]
fn listing_pages_exist_for_every_filter_and_sort() {
    let built = build();
    for filter in ["all", "fullstack", "frontend", "backend", "ml"] {
        for sort in ["recent", "featured", "alphabetical"] {
            let rel = format!("projects/{filter}/{sort}/index.html");
            assert!(built.dist.path().join(&rel).is_file(), "missing {rel}");
        }
    }
}

#[test]
fn default_listing_is_recent_first() {
    let built = build();
    let html = read(built.dist.path(), "projects/index.html");
    let pos = |id: &str| {
        html.find(&format!("/projects/{id}/"))
            .unwrap_or_else(|| panic!("{id} not listed"))
    };
    // 2024 before 2023 before 2022; catalog order within a year
    assert!(pos("nutri-focus") < pos("devlink"));
    assert!(pos("devlink") < pos("study-sync"));
    assert!(pos("study-sync") < pos("pixel-grid"));
    assert!(pos("pixel-grid") < pos("churn-model"));
}

#[test]
fn empty_category_shows_empty_state() {
    let built = build();
    let html = read(built.dist.path(), "projects/backend/recent/index.html");
    assert!(html.contains("No projects found"));
    // Stats are computed over the whole catalog, not the filtered view
    assert!(html.contains("<dt>Total Projects</dt><dd>5</dd>"));
}

#[test]
fn project_detail_page_has_case_study_sections() {
    let built = build();
    let html = read(built.dist.path(), "projects/nutri-focus/index.html");
    assert!(html.contains("<h1>Nutri Focus</h1>"));
    assert!(html.contains("Challenges"));
    assert!(html.contains("Tech Stack"));
    assert!(html.contains("Visit live site"));
}

#[test]
fn blog_post_renders_markdown_body() {
    let built = build();
    let html = read(built.dist.path(), "blog/microservices-lessons/index.html");
    assert!(html.contains("<h1>Microservices in Action</h1>"));
    assert!(html.contains("6 min read"));
    assert!(html.contains("January 10, 2024"));
}

#[test]
fn contact_page_posts_to_mailto() {
    let built = build();
    let html = read(built.dist.path(), "contact.html");
    assert!(html.contains(r#"action="mailto:hello@ada.example""#));
    assert!(html.contains("Addis Ababa, Ethiopia"));
    assert!(html.contains(r#"minlength="10""#));
}

#[test]
fn stylesheet_carries_theme_variables() {
    let built = build();
    let css = read(built.dist.path(), &built.report.stylesheet);
    assert!(css.contains("--color-accent"));
    assert!(css.contains("--content-width"));
    assert!(css.contains("prefers-color-scheme: dark"));
    assert!(css.contains(".card-grid"));
}

#[test]
fn rebuild_is_deterministic() {
    let first = build();
    let second = build();
    assert_eq!(first.report.stylesheet, second.report.stylesheet);
    assert_eq!(first.report.pages, second.report.pages);
    assert_eq!(
        read(first.dist.path(), "projects/all/alphabetical/index.html"),
        read(second.dist.path(), "projects/all/alphabetical/index.html")
    );
}

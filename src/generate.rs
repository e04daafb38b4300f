//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Takes the scan manifest and writes the
//! final static site.
//!
//! ## Generated Pages
//!
//! - **Home** (`/index.html`): hero, catalog stats, featured projects, recent
//!   posts, skills, testimonials
//! - **Project listings** (`/projects/<filter>/<sort>/index.html`): one page per
//!   category filter and sort mode, plus `/projects/index.html` for the
//!   default view. Filter buttons and sort links move between them.
//! - **Project details** (`/projects/<id>/index.html`)
//! - **Blog** (`/blog/index.html`, `/blog/<slug>/index.html`)
//! - **Contact** (`/contact.html`): contact details and a form whose
//!   constraints match [`crate::validate`]
//! - **Content pages** (`/<slug>.html`): markdown converted to HTML
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── about.html
//! ├── contact.html
//! ├── style-1a2b3c4d.css         # Fingerprinted stylesheet
//! ├── projects.json              # Catalog + stats export
//! ├── projects/
//! │   ├── index.html             # all, default sort
//! │   ├── all/recent/index.html
//! │   ├── ml/alphabetical/index.html
//! │   └── nutri-focus/index.html # Detail page
//! └── blog/
//!     ├── index.html
//!     └── static-sites-in-rust/index.html
//! ```
//!
//! The listing pages do the filtering at build time, so the published site
//! needs no JavaScript. Free-text search is available through the
//! `projects` CLI command and the JSON export.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping. Pages are
//! rendered on a rayon pool sized by `build.max_threads`.

use crate::blog::BlogPost;
use crate::catalog::{self, ProjectRecord};
use crate::config::{self, SiteConfig};
use crate::query::{self, CatalogStats, CategoryFilter, SortMode, category_counts};
use crate::scan::{ASSETS_DIR, Manifest};
use crate::types::{NavItem, Page};
use crate::validate;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Options, Parser, html as md_html};
use rayon::prelude::*;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Asset copy error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("assets/{0} would overwrite a generated file")]
    AssetCollision(String),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const EXPORT_FILE: &str = "projects.json";

/// Files written by one generate run, relative to the output directory.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub pages: Vec<String>,
    pub stylesheet: String,
    pub assets_copied: usize,
}

/// Everything a page renderer needs besides its own subject.
pub struct SiteContext<'a> {
    pub config: &'a SiteConfig,
    pub navigation: &'a [NavItem],
    pub stylesheet_href: String,
    pub stats: CatalogStats,
    pub current_year: i32,
}

/// One output HTML file and what goes in it.
#[derive(Debug, Clone, Copy)]
enum PageJob<'a> {
    Home,
    Listing(CategoryFilter, SortMode),
    DefaultListing,
    Project(&'a ProjectRecord),
    BlogIndex,
    Post(&'a BlogPost),
    Contact,
    Content(&'a Page),
}

impl PageJob<'_> {
    fn output_path(&self) -> String {
        match self {
            PageJob::Home => "index.html".to_string(),
            PageJob::Listing(filter, sort) => format!("projects/{filter}/{sort}/index.html"),
            PageJob::DefaultListing => "projects/index.html".to_string(),
            PageJob::Project(p) => format!("projects/{}/index.html", p.id),
            PageJob::BlogIndex => "blog/index.html".to_string(),
            PageJob::Post(p) => format!("blog/{}/index.html", p.slug),
            PageJob::Contact => "contact.html".to_string(),
            PageJob::Content(p) => format!("{}.html", p.slug),
        }
    }
}

/// Read the manifest written by scan and generate the site from it.
pub fn generate(
    manifest_path: &Path,
    source_root: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let manifest = load_manifest(manifest_path)?;
    generate_site(&manifest, source_root, output_dir)
}

/// Read back the manifest that scan wrote.
pub fn load_manifest(manifest_path: &Path) -> Result<Manifest, GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    Ok(serde_json::from_str(&manifest_content)?)
}

pub fn generate_site(
    manifest: &Manifest,
    source_root: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let _span = tracing::info_span!("generate", output = %output_dir.display()).entered();
    fs::create_dir_all(output_dir)?;

    // Stylesheet: config-driven variables first, then the static rules
    let css = format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&manifest.config.colors),
        config::generate_theme_css(&manifest.config.theme),
        CSS_STATIC
    );
    let stylesheet = fingerprinted_name("style", "css", css.as_bytes());
    let jobs = page_jobs(manifest);

    let assets_dir = source_root.join(ASSETS_DIR);
    if manifest.has_assets {
        let mut generated: HashSet<String> = jobs.iter().map(PageJob::output_path).collect();
        generated.insert(EXPORT_FILE.to_string());
        generated.insert(stylesheet.clone());
        check_asset_collisions(&assets_dir, &generated)?;
    }

    fs::write(output_dir.join(&stylesheet), &css)?;

    let current_year = query::current_year();
    let ctx = SiteContext {
        config: &manifest.config,
        navigation: &manifest.navigation,
        stylesheet_href: format!("/{stylesheet}"),
        stats: CatalogStats::compute(&manifest.projects, current_year),
        current_year,
    };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config::effective_threads(&manifest.config.build))
        .build()?;
    let pages = pool.install(|| {
        jobs.par_iter()
            .map(|job| -> Result<String, GenerateError> {
                let rel = job.output_path();
                let markup = render_job(job, manifest, &ctx);
                let path = output_dir.join(&rel);
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&path, markup.into_string())?;
                tracing::debug!(page = %rel, "rendered");
                Ok(rel)
            })
            .collect::<Result<Vec<String>, GenerateError>>()
    })?;

    let export = catalog_export(&manifest.projects, ctx.stats);
    fs::write(
        output_dir.join(EXPORT_FILE),
        serde_json::to_string_pretty(&export)?,
    )?;

    let assets_copied = if manifest.has_assets {
        copy_assets(&assets_dir, output_dir)?
    } else {
        0
    };

    tracing::info!(
        pages = pages.len(),
        assets = assets_copied,
        stylesheet = %stylesheet,
        "site generated"
    );
    Ok(GenerateReport {
        pages,
        stylesheet,
        assets_copied,
    })
}

fn page_jobs(manifest: &Manifest) -> Vec<PageJob<'_>> {
    let mut jobs = vec![PageJob::Home, PageJob::DefaultListing];
    for filter in CategoryFilter::ALL {
        for sort in SortMode::ALL {
            jobs.push(PageJob::Listing(filter, sort));
        }
    }
    jobs.extend(manifest.projects.iter().map(PageJob::Project));
    jobs.push(PageJob::BlogIndex);
    jobs.extend(manifest.posts.iter().map(PageJob::Post));
    jobs.push(PageJob::Contact);
    jobs.extend(
        manifest
            .pages
            .iter()
            .filter(|p| !p.is_link)
            .map(PageJob::Content),
    );
    jobs
}

fn render_job(job: &PageJob<'_>, manifest: &Manifest, ctx: &SiteContext<'_>) -> Markup {
    match *job {
        PageJob::Home => render_home(manifest, ctx),
        PageJob::DefaultListing => render_listing(
            &manifest.projects,
            CategoryFilter::All,
            manifest.config.projects.default_sort,
            ctx,
        ),
        PageJob::Listing(filter, sort) => render_listing(&manifest.projects, filter, sort, ctx),
        PageJob::Project(project) => render_project_page(project, ctx),
        PageJob::BlogIndex => render_blog_index(&manifest.posts, ctx),
        PageJob::Post(post) => render_post_page(post, ctx),
        PageJob::Contact => render_contact_page(ctx),
        PageJob::Content(page) => render_content_page(page, ctx),
    }
}

/// `style` + `css` + bytes → `style-1a2b3c4d.css` (first 8 hex of SHA-256).
pub fn fingerprinted_name(stem: &str, ext: &str, content: &[u8]) -> String {
    let digest = Sha256::digest(content);
    let hex: String = digest.iter().take(4).map(|b| format!("{b:02x}")).collect();
    format!("{stem}-{hex}.{ext}")
}

/// Listing URL for a filter/sort pair. The all + default view lives at
/// `/projects/`.
pub fn listing_href(filter: CategoryFilter, sort: SortMode, default_sort: SortMode) -> String {
    if filter == CategoryFilter::All && sort == default_sort {
        "/projects/".to_string()
    } else {
        format!("/projects/{filter}/{sort}/")
    }
}

/// Fail before anything is written if an asset shares a path with a
/// generated file.
fn check_asset_collisions(src: &Path, generated: &HashSet<String>) -> Result<(), GenerateError> {
    for entry in WalkDir::new(src) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        let rel = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let rel = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        if generated.contains(&rel) {
            return Err(GenerateError::AssetCollision(rel));
        }
    }
    Ok(())
}

fn copy_assets(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    let mut copied = 0;
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let rel = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[derive(Serialize)]
struct CategoryCount {
    category: &'static str,
    label: &'static str,
    count: usize,
}

#[derive(Serialize)]
struct CatalogExport<'a> {
    stats: CatalogStats,
    categories: Vec<CategoryCount>,
    projects: &'a [ProjectRecord],
}

fn catalog_export(projects: &[ProjectRecord], stats: CatalogStats) -> CatalogExport<'_> {
    CatalogExport {
        stats,
        categories: category_counts(projects)
            .into_iter()
            .map(|(filter, count)| CategoryCount {
                category: filter.as_str(),
                label: filter.label(),
                count,
            })
            .collect(),
        projects,
    }
}

fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document: head, site header, main, footer.
fn base_document(
    title: &str,
    description: &str,
    current_href: &str,
    ctx: &SiteContext<'_>,
    content: Markup,
) -> Markup {
    let site = &ctx.config.site;
    let full_title = if title == site.name {
        title.to_string()
    } else {
        format!("{title} | {}", site.name)
    };
    let canonical = (!site.url.is_empty()).then(|| format!("{}{current_href}", site.url));

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (full_title) }
                meta name="description" content=(description);
                meta property="og:title" content=(full_title);
                meta property="og:description" content=(description);
                @if let Some(url) = &canonical {
                    link rel="canonical" href=(url);
                    meta property="og:url" content=(url);
                }
                @if let Some(image) = &site.og_image {
                    meta property="og:image" content=(image);
                }
                link rel="stylesheet" href=(ctx.stylesheet_href);
            }
            body {
                (site_header(ctx, current_href))
                main.site-main {
                    (content)
                }
                (site_footer(ctx))
            }
        }
    }
}

fn site_header(ctx: &SiteContext<'_>, current_href: &str) -> Markup {
    html! {
        header.site-header {
            a.site-name href="/" { (ctx.config.site.name) }
            nav.site-nav {
                (render_nav(ctx.navigation, current_href))
            }
        }
    }
}

/// Renders the navigation menu (hamburger on narrow screens, no JavaScript).
pub fn render_nav(items: &[NavItem], current_href: &str) -> Markup {
    html! {
        input.nav-toggle type="checkbox" id="nav-toggle";
        label.nav-hamburger for="nav-toggle" aria-label="Menu" {
            span.hamburger-line {}
            span.hamburger-line {}
            span.hamburger-line {}
        }
        ul.nav-list {
            @for item in items {
                @let is_current = !item.external
                    && (item.href == current_href
                        || (item.href != "/" && current_href.starts_with(&item.href)));
                li class=[is_current.then_some("current")] {
                    @if item.external {
                        a href=(item.href) target="_blank" rel="noopener noreferrer" { (item.title) }
                    } @else {
                        a href=(item.href) { (item.title) }
                    }
                }
            }
        }
    }
}

fn site_footer(ctx: &SiteContext<'_>) -> Markup {
    let config = ctx.config;
    html! {
        footer.site-footer {
            div.footer-links {
                @for (label, url) in config.links.social() {
                    a href=(url) target="_blank" rel="noopener noreferrer" { (label) }
                }
                @if let Some(email) = config.contact_email() {
                    a href={ "mailto:" (email) } { (email) }
                }
            }
            @if let Some(action) = &config.contact.form_action {
                form.newsletter method="post" action=(action) {
                    label for="newsletter-email" { "Get new posts by email" }
                    input id="newsletter-email" type="email" name="email" required placeholder="you@example.com";
                    button type="submit" { "Subscribe" }
                }
            }
            p.copyright { "© " (ctx.current_year) " " (config.site.name) }
        }
    }
}

fn stats_block(stats: &CatalogStats) -> Markup {
    html! {
        dl.stats {
            div.stat { dt { "Total Projects" } dd { (stats.total) } }
            div.stat { dt { "Featured" } dd { (stats.featured) } }
            div.stat { dt { "This Year" } dd { (stats.this_year) } }
            div.stat { dt { "Live Projects" } dd { (stats.live) } }
        }
    }
}

/// Card used on the home page and every listing.
fn project_card(project: &ProjectRecord, tag_limit: usize) -> Markup {
    let preview = catalog::tag_preview(&project.tags, tag_limit);
    html! {
        article.project-card.featured[project.featured] {
            @if let Some(image) = &project.image {
                img.project-image src=(image) alt=(project.title) loading="lazy";
            }
            @if project.featured {
                span.badge { "Featured" }
            }
            h3 {
                a href={ "/projects/" (project.id) "/" } { (project.title) }
            }
            p.project-description { (project.description) }
            ul.tags {
                @for tag in preview.shown {
                    li.tag { (tag) }
                }
                @if preview.overflow > 0 {
                    li.tag.tag-overflow { "+" (preview.overflow) }
                }
            }
            div.project-meta {
                span.project-year { (project.year) }
                span.project-category { (project.category.label()) }
                @if let Some(url) = &project.live_url {
                    a href=(url) target="_blank" rel="noopener noreferrer" { "Live" }
                }
                @if let Some(url) = &project.github_url {
                    a href=(url) target="_blank" rel="noopener noreferrer" { "Source" }
                }
            }
        }
    }
}

fn empty_state() -> Markup {
    html! {
        div.empty-state {
            h3 { "No projects found" }
            p { "Try adjusting your search or filter criteria." }
        }
    }
}

fn post_card(post: &BlogPost) -> Markup {
    html! {
        article.post-card.featured[post.featured] {
            h3 {
                a href={ "/blog/" (post.slug) "/" } { (post.title) }
            }
            p.post-meta {
                time datetime=(post.date.to_string()) { (post.date.format("%B %-d, %Y").to_string()) }
                " · " (post.read_time) " min read"
            }
            p.post-excerpt { (post.excerpt) }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

fn render_home(manifest: &Manifest, ctx: &SiteContext<'_>) -> Markup {
    let config = ctx.config;
    let featured: Vec<&ProjectRecord> =
        query::query(&manifest.projects, CategoryFilter::All, "", SortMode::Featured)
            .into_iter()
            .filter(|p| p.featured)
            .take(config.projects.featured_on_home)
            .collect();
    let recent_posts = manifest.posts.iter().take(config.blog.recent_on_home);

    let content = html! {
        section.hero {
            h1 { (config.site.name) }
            p.hero-title { (config.site.title) }
            p.hero-description { (config.site.description) }
            div.hero-actions {
                a.button href="/projects/" { "View Projects" }
                a.button.button-outline href="/contact.html" { "Get in Touch" }
            }
        }
        @if ctx.stats.total > 0 {
            section.home-stats {
                (stats_block(&ctx.stats))
            }
        }
        @if !featured.is_empty() {
            section.featured-projects {
                h2 { "Featured Projects" }
                div.card-grid {
                    @for project in &featured {
                        (project_card(project, config.projects.tag_preview))
                    }
                }
                a.more href="/projects/" { "All projects →" }
            }
        }
        @if !manifest.posts.is_empty() {
            section.recent-posts {
                h2 { "Latest Writing" }
                div.card-grid {
                    @for post in recent_posts {
                        (post_card(post))
                    }
                }
            }
        }
        @if !config.skills.is_empty() {
            section.skills {
                h2 { "Skills" }
                div.skill-groups {
                    @for group in &config.skills {
                        div.skill-group {
                            h3 { (group.name) }
                            ul.tags {
                                @for item in &group.items {
                                    li.tag { (item) }
                                }
                            }
                        }
                    }
                }
            }
        }
        @if !config.testimonials.is_empty() {
            section.testimonials {
                h2 { "What People Say" }
                @for t in &config.testimonials {
                    blockquote.testimonial {
                        p { (t.content) }
                        footer { (t.name) ", " (t.role) " at " (t.company) }
                    }
                }
            }
        }
    };

    base_document(
        &config.site.name,
        &config.site.description,
        "/",
        ctx,
        content,
    )
}

/// One pre-computed view of the catalog.
fn render_listing(
    projects: &[ProjectRecord],
    filter: CategoryFilter,
    sort: SortMode,
    ctx: &SiteContext<'_>,
) -> Markup {
    let default_sort = ctx.config.projects.default_sort;
    let results = query::query(projects, filter, "", sort);
    let counts = category_counts(projects);
    let href = listing_href(filter, sort, default_sort);

    let content = html! {
        section.page-hero {
            h1 { "My Projects" }
            p { "Things I have built across full-stack development, machine learning, and user experience." }
            (stats_block(&ctx.stats))
        }
        section.listing-controls {
            nav.category-filters aria-label="Category" {
                @for (f, count) in &counts {
                    a.filter-button.active[*f == filter]
                        href=(listing_href(*f, sort, default_sort)) {
                        (f.label())
                        span.count { (count) }
                    }
                }
            }
            nav.sort-modes aria-label="Sort" {
                @for mode in SortMode::ALL {
                    a.sort-link.active[mode == sort]
                        href=(listing_href(filter, mode, default_sort)) {
                        (mode.label())
                    }
                }
            }
        }
        section.listing {
            @if results.is_empty() {
                (empty_state())
            } @else {
                div.card-grid {
                    @for project in &results {
                        (project_card(project, ctx.config.projects.tag_preview))
                    }
                }
            }
        }
    };

    let title = match filter {
        CategoryFilter::All => "Projects".to_string(),
        CategoryFilter::Only(c) => format!("{} Projects", c.label()),
    };
    base_document(&title, &ctx.config.site.description, &href, ctx, content)
}

fn render_project_page(project: &ProjectRecord, ctx: &SiteContext<'_>) -> Markup {
    let sections: [(&str, &Vec<String>); 3] = [
        ("Challenges", &project.challenges),
        ("Solutions", &project.solutions),
        ("Results", &project.results),
    ];

    let content = html! {
        article.project-detail {
            p.breadcrumb {
                a href="/projects/" { "Projects" }
                " › "
                (project.category.label())
            }
            h1 { (project.title) }
            @if project.featured {
                span.badge { "Featured" }
            }
            @if let Some(image) = &project.image {
                img.project-image src=(image) alt=(project.title);
            }
            p.lead { (project.description) }
            ul.tags {
                @for tag in &project.tags {
                    li.tag { (tag) }
                }
            }
            div.project-meta {
                span.project-year { (project.year) }
                @if let Some(url) = &project.live_url {
                    a.button href=(url) target="_blank" rel="noopener noreferrer" { "Visit live site" }
                }
                @if let Some(url) = &project.github_url {
                    a.button.button-outline href=(url) target="_blank" rel="noopener noreferrer" { "View source" }
                }
            }
            @if project.has_details() {
                div.case-study {
                    @for (heading, items) in sections {
                        @if !items.is_empty() {
                            section.detail-section {
                                h2 { (heading) }
                                ul {
                                    @for item in items {
                                        li { (item) }
                                    }
                                }
                            }
                        }
                    }
                    @if !project.tech_stack.is_empty() {
                        section.detail-section {
                            h2 { "Tech Stack" }
                            dl.tech-stack {
                                @for group in &project.tech_stack {
                                    dt { (group.name) }
                                    dd { (group.items.join(", ")) }
                                }
                            }
                        }
                    }
                }
            } @else {
                p.no-details { "A detailed case study for this project is coming soon." }
            }
        }
    };

    let href = format!("/projects/{}/", project.id);
    base_document(&project.title, &project.description, &href, ctx, content)
}

fn render_blog_index(posts: &[BlogPost], ctx: &SiteContext<'_>) -> Markup {
    let content = html! {
        section.page-hero {
            h1 { "Blog & Insights" }
            p { "Notes on technology, development practice, and building products." }
        }
        @if posts.is_empty() {
            div.empty-state {
                h3 { "Coming soon" }
                p { "Posts are on the way. " a href="/contact.html" { "Get notified" } "." }
            }
        } @else {
            div.card-grid {
                @for post in posts {
                    (post_card(post))
                }
            }
        }
    };
    base_document("Blog", &ctx.config.site.description, "/blog/", ctx, content)
}

fn render_post_page(post: &BlogPost, ctx: &SiteContext<'_>) -> Markup {
    let body_html = markdown_to_html(&post.body);
    let content = html! {
        article.post {
            p.breadcrumb { a href="/blog/" { "Blog" } }
            h1 { (post.title) }
            p.post-meta {
                time datetime=(post.date.to_string()) { (post.date.format("%B %-d, %Y").to_string()) }
                " · " (post.read_time) " min read"
            }
            @if let Some(image) = &post.image {
                img.post-image src=(image) alt=(post.title);
            }
            div.post-body {
                (PreEscaped(body_html))
            }
            ul.tags {
                @for tag in &post.tags {
                    li.tag { (tag) }
                }
            }
        }
    };
    let href = format!("/blog/{}/", post.slug);
    base_document(&post.title, &post.description, &href, ctx, content)
}

/// Contact details and form. Field constraints mirror [`validate::contact`].
fn render_contact_page(ctx: &SiteContext<'_>) -> Markup {
    let contact = &ctx.config.contact;
    let email = ctx.config.contact_email();
    let action = contact
        .form_action
        .clone()
        .or_else(|| email.map(|e| format!("mailto:{e}")));
    let is_mailto = contact.form_action.is_none();

    let content = html! {
        section.page-hero {
            h1 { "Get in Touch" }
            p { "Have a project in mind or just want to say hello? Send a message." }
        }
        div.contact-layout {
            aside.contact-info {
                @if let Some(email) = email {
                    p { strong { "Email " } a href={ "mailto:" (email) } { (email) } }
                }
                @if let Some(location) = &contact.location {
                    p { strong { "Location " } (location) }
                }
                @if let Some(availability) = &contact.availability {
                    p.availability { (availability) }
                }
                ul.social {
                    @for (label, url) in ctx.config.links.social() {
                        li { a href=(url) target="_blank" rel="noopener noreferrer" { (label) } }
                    }
                }
            }
            @if let Some(action) = &action {
                form.contact-form method="post" action=(action)
                    enctype=[is_mailto.then_some("text/plain")] {
                    label for="name" { "Name" }
                    input id="name" type="text" name="name" required minlength=(validate::NAME_MIN);
                    label for="email" { "Email" }
                    input id="email" type="email" name="email" required;
                    label for="subject" { "Subject" }
                    input id="subject" type="text" name="subject" required minlength=(validate::SUBJECT_MIN);
                    label for="message" { "Message" }
                    textarea id="message" name="message" rows="6" required minlength=(validate::MESSAGE_MIN) {}
                    button type="submit" { "Send Message" }
                }
            } @else {
                p.contact-unavailable { "The contact form is not configured yet." }
            }
        }
    };

    base_document(
        "Contact",
        &ctx.config.site.description,
        "/contact.html",
        ctx,
        content,
    )
}

fn render_content_page(page: &Page, ctx: &SiteContext<'_>) -> Markup {
    let body_html = markdown_to_html(&page.body);
    let content = html! {
        article.content-page {
            (PreEscaped(body_html))
        }
    };
    let href = format!("/{}.html", page.slug);
    base_document(
        &page.title,
        &ctx.config.site.description,
        &href,
        ctx,
        content,
    )
}

// ============================================================================
// Tests
// ============================================================================

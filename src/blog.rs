//! Blog posts: markdown files with TOML front matter under `content/blog/`.
//!
//! ```text
//! +++
//! title = "Building Nutri Focus: A Full-Stack ML Journey"
//! description = "The tech and thinking behind an AI nutrition app."
//! date = "2024-01-15"
//! tags = ["Full-Stack", "Machine Learning"]
//! featured = true                # optional
//! excerpt = "What I learned..."  # optional, defaults to description
//! read_time = 8                  # optional minutes, estimated when absent
//! image = "/images/blog/nutri.jpg"  # optional
//! +++
//!
//! Markdown body...
//! ```
//!
//! The slug is the file stem with any `NNN-` prefix removed. Every post passes
//! the blog-post schema in [`crate::validate`] or the scan fails, naming the
//! file.

use crate::naming;
use crate::validate::{self, BlogPostFields, ValidationErrors};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

pub const BLOG_DIR: &str = "blog";
const FENCE: &str = "+++";

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("{0}: missing `+++` front matter")]
    MissingFrontMatter(PathBuf),
    #[error("{path}: front matter error: {source}")]
    FrontMatter {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("{path}: {errors}")]
    Invalid {
        path: PathBuf,
        errors: ValidationErrors,
    },
    #[error("{0}: file name leaves an empty slug; add a name after the number prefix")]
    EmptySlug(PathBuf),
    #[error("Duplicate blog slug {slug:?} ({path})")]
    DuplicateSlug { slug: String, path: PathBuf },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FrontMatter {
    title: String,
    description: String,
    /// Quoted `YYYY-MM-DD`.
    date: NaiveDate,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    featured: bool,
    excerpt: Option<String>,
    read_time: Option<u32>,
    image: Option<String>,
}

/// A parsed, validated blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub tags: Vec<String>,
    pub featured: bool,
    pub excerpt: String,
    /// Minutes.
    pub read_time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Markdown body after the front matter.
    pub body: String,
    /// Path relative to the content root.
    pub source: String,
}

/// Split `+++`-fenced front matter from the body.
///
/// Returns `None` when the first non-empty line is not a fence or the closing
/// fence is missing.
pub fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let content = content.trim_start_matches('\u{feff}').trim_start();
    let rest = content.strip_prefix(FENCE)?;
    let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            let front = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((front, body));
        }
        offset += line.len();
    }
    None
}

/// Whole minutes to read `body`, at least one.
pub fn estimate_read_time(body: &str, words_per_minute: u32) -> u32 {
    let words = body.split_whitespace().count() as u32;
    words.div_ceil(words_per_minute.max(1)).max(1)
}

/// Parse one post file's content. `source` is used for slug and error messages.
pub fn parse_post(
    source: &Path,
    content: &str,
    words_per_minute: u32,
) -> Result<BlogPost, BlogError> {
    let (front, body) = split_front_matter(content)
        .ok_or_else(|| BlogError::MissingFrontMatter(source.to_path_buf()))?;
    let meta: FrontMatter = toml::from_str(front).map_err(|e| BlogError::FrontMatter {
        path: source.to_path_buf(),
        source: e,
    })?;

    validate::blog_post(&BlogPostFields {
        title: &meta.title,
        description: &meta.description,
        content: body,
        tags: &meta.tags,
    })
    .map_err(|errors| BlogError::Invalid {
        path: source.to_path_buf(),
        errors,
    })?;

    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let slug = naming::parse_stem(&stem).slug;
    if slug.is_empty() {
        return Err(BlogError::EmptySlug(source.to_path_buf()));
    }

    Ok(BlogPost {
        slug,
        read_time: meta
            .read_time
            .unwrap_or_else(|| estimate_read_time(body, words_per_minute)),
        excerpt: meta.excerpt.unwrap_or_else(|| meta.description.clone()),
        title: meta.title,
        description: meta.description,
        date: meta.date,
        tags: meta.tags,
        featured: meta.featured,
        image: meta.image,
        body: body.trim().to_string(),
        source: source.to_string_lossy().to_string(),
    })
}

/// Load every `*.md` under `root/blog/`, newest first.
///
/// A missing blog directory means no posts.
pub fn load_posts(root: &Path, words_per_minute: u32) -> Result<Vec<BlogPost>, BlogError> {
    let blog_dir = root.join(BLOG_DIR);
    if !blog_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut posts = Vec::new();
    let mut slugs = HashSet::new();
    let walker = WalkDir::new(&blog_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !e.file_name().to_string_lossy().starts_with('.'));
    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        let is_markdown = entry.file_type().is_file()
            && path
                .extension()
                .is_some_and(|e| e.eq_ignore_ascii_case("md"));
        if !is_markdown {
            continue;
        }
        let rel = path.strip_prefix(root).unwrap_or(path);
        let content = fs::read_to_string(path)?;
        let post = parse_post(rel, &content, words_per_minute)?;
        if !slugs.insert(post.slug.clone()) {
            return Err(BlogError::DuplicateSlug {
                slug: post.slug,
                path: rel.to_path_buf(),
            });
        }
        tracing::debug!(slug = %post.slug, date = %post.date, "loaded blog post");
        posts.push(post);
    }

    sort_posts(&mut posts);
    Ok(posts)
}

/// Newest first; same-day posts by slug.
pub fn sort_posts(posts: &mut [BlogPost]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const BODY: &str = "Building this taught me more about microservices, ML integration, and user experience than any tutorial.";

    fn post_file(title: &str, date: &str, extra: &str) -> String {
        format!(
            "+++\ntitle = \"{title}\"\ndescription = \"A description long enough\"\ndate = \"{date}\"\ntags = [\"Rust\"]\n{extra}+++\n\n{BODY}\n"
        )
    }

    #[test]
    fn split_front_matter_finds_both_fences() {
        let (front, body) = split_front_matter("+++\ntitle = \"x\"\n+++\nbody\n").unwrap();
        assert_eq!(front, "title = \"x\"\n");
        assert_eq!(body, "body\n");
    }

    #[test]
    fn split_front_matter_handles_crlf() {
        let (front, body) = split_front_matter("+++\r\na = 1\r\n+++\r\nbody").unwrap();
        assert_eq!(front, "a = 1\r\n");
        assert_eq!(body, "body");
    }

    #[test]
    fn split_front_matter_requires_fences() {
        assert!(split_front_matter("# Just markdown").is_none());
        assert!(split_front_matter("+++\ntitle = \"x\"\nno closing").is_none());
    }

    #[test]
    fn read_time_rounds_up_and_has_a_floor() {
        assert_eq!(estimate_read_time("", 200), 1);
        assert_eq!(estimate_read_time(&"w ".repeat(201), 200), 2);
        assert_eq!(estimate_read_time(&"w ".repeat(400), 200), 2);
    }

    #[test]
    fn parse_post_strips_number_prefix_from_slug() {
        let post = parse_post(
            Path::new("blog/010-hello-world.md"),
            &post_file("Hello world", "2024-01-15", ""),
            200,
        )
        .unwrap();
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(post.excerpt, "A description long enough");
        assert_eq!(post.read_time, 1);
        assert!(!post.featured);
    }

    #[test]
    fn parse_post_keeps_explicit_read_time() {
        let post = parse_post(
            Path::new("blog/x.md"),
            &post_file("Hello world", "2024-01-15", "read_time = 8\nfeatured = true\n"),
            200,
        )
        .unwrap();
        assert_eq!(post.read_time, 8);
        assert!(post.featured);
    }

    #[test]
    fn parse_post_rejects_schema_violations() {
        let content = "+++\ntitle = \"Hi\"\ndescription = \"A description long enough\"\ndate = \"2024-01-15\"\ntags = []\n+++\nshort\n";
        let err = parse_post(Path::new("blog/x.md"), content, 200).unwrap_err();
        match err {
            BlogError::Invalid { errors, .. } => {
                assert_eq!(errors.fields(), vec!["title", "content", "tags"]);
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn parse_post_rejects_bad_date() {
        let err = parse_post(
            Path::new("blog/x.md"),
            &post_file("Hello world", "15/01/2024", ""),
            200,
        )
        .unwrap_err();
        assert!(matches!(err, BlogError::FrontMatter { .. }));
    }

    #[test]
    fn load_posts_orders_newest_first() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join(BLOG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("older.md"), post_file("Older post", "2023-12-20", "")).unwrap();
        fs::write(dir.join("newer.md"), post_file("Newer post", "2024-01-10", "")).unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let posts = load_posts(tmp.path(), 200).unwrap();
        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newer", "older"]);
        assert_eq!(posts[0].source, "blog/newer.md");
    }

    #[test]
    fn load_posts_rejects_duplicate_slugs() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join(BLOG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("010-same.md"), post_file("First one", "2024-01-01", "")).unwrap();
        fs::write(dir.join("020-same.md"), post_file("Second one", "2024-01-02", "")).unwrap();
        assert!(matches!(
            load_posts(tmp.path(), 200),
            Err(BlogError::DuplicateSlug { .. })
        ));
    }

    #[test]
    fn parse_post_rejects_number_only_file_name() {
        let content = post_file("Year in review", "2024-12-31", "");
        let result = parse_post(Path::new("blog/2024.md"), &content, 200);
        assert!(matches!(result, Err(BlogError::EmptySlug(_))));
    }

    #[test]
    fn load_posts_rejects_post_that_would_replace_index() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join(BLOG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("2024.md"), post_file("Year in review", "2024-12-31", "")).unwrap();
        let err = load_posts(tmp.path(), 200).unwrap_err();
        assert!(matches!(err, BlogError::EmptySlug(_)));
        assert!(err.to_string().contains("2024.md"));
    }

    #[test]
    fn load_posts_without_blog_dir_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(load_posts(tmp.path(), 200).unwrap().is_empty());
    }
}

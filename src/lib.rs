//! # Devfolio
//!
//! A static site generator for developer portfolios. A content directory
//! holding a project catalog, blog posts, and markdown pages becomes a
//! plain-HTML site with pre-rendered, filterable project listings.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (filesystem → validated data)
//! 2. Generate  manifest  →  dist/            (final HTML site)
//! ```
//!
//! The manifest is human-readable JSON, so the output of stage 1 can be
//! inspected before anything is rendered.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: loads config, catalog, posts, and pages into the manifest |
//! | [`generate`] | Stage 2: renders the site from the manifest using Maud |
//! | [`catalog`] | `projects.toml` loading, `ProjectRecord`, catalog invariants |
//! | [`query`] | Category filter, search, and sort over the catalog; aggregate stats |
//! | [`validate`] | Field-level schemas for the contact, newsletter, filter, and post forms |
//! | [`submit`] | Simulated submission with one in-flight request per form |
//! | [`blog`] | Markdown posts with `+++` TOML front matter |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`types`] | Shared types serialized in the manifest (`NavItem`, `Page`) |
//! | [`naming`] | `NNN-name` filename convention parser |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! # Design Decisions
//!
//! ## Listings Rendered at Build Time
//!
//! Every (category filter, sort mode) pair is rendered to its own page, so
//! filtering works with links instead of JavaScript. Free-text search runs
//! through the same [`query::query`] function from the `projects` command.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): malformed markup
//! is a compile error and every interpolation is escaped.
//!
//! ## NNN-Prefix Ordering
//!
//! Pages and posts use a numeric prefix (`010-`, `020-`) for ordering, parsed
//! by [`naming::parse_stem`]. Unnumbered pages are generated but hidden from
//! navigation.

pub mod blog;
pub mod catalog;
pub mod config;
pub mod generate;
pub mod logging;
pub mod naming;
pub mod output;
pub mod query;
pub mod scan;
pub mod submit;
pub mod types;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;

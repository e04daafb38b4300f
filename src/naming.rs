//! Filename convention shared by pages and blog posts: `NNN-slug.md`.
//!
//! The numeric prefix is optional. For pages it decides navigation order and
//! visibility; for blog posts it is only a way to keep files sorted on disk
//! and never leaks into the URL.
//!
//! - `010-about-me` → number 10, slug `about-me`, display title "about me"
//! - `draft-notes` → no number, slug `draft-notes`, display title "draft notes"

/// A filename stem split into its optional number and its slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedStem {
    pub number: Option<u32>,
    /// Stem without the `NNN-` prefix. Empty for number-only stems.
    pub slug: String,
    /// Slug with dashes shown as spaces.
    pub display_title: String,
}

impl NumberedStem {
    pub fn sort_key(&self) -> u32 {
        self.number.unwrap_or(u32::MAX)
    }
}

/// Split `NNN-slug` into number and slug.
///
/// Only an all-digit segment before the first dash counts as a number, so
/// `2024-recap` is numbered but `v2-launch` is not.
pub fn parse_stem(stem: &str) -> NumberedStem {
    let (number, slug) = match stem.split_once('-') {
        Some((prefix, rest)) if is_number(prefix) => (prefix.parse().ok(), rest),
        _ if is_number(stem) => (stem.parse().ok(), ""),
        _ => (None, stem),
    };
    NumberedStem {
        number,
        slug: slug.to_string(),
        display_title: slug.replace('-', " "),
    }
}

fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_page() {
        let s = parse_stem("010-about-me");
        assert_eq!(s.number, Some(10));
        assert_eq!(s.slug, "about-me");
        assert_eq!(s.display_title, "about me");
        assert_eq!(s.sort_key(), 10);
    }

    #[test]
    fn unnumbered_keeps_full_stem() {
        let s = parse_stem("draft-notes");
        assert_eq!(s.number, None);
        assert_eq!(s.slug, "draft-notes");
        assert_eq!(s.display_title, "draft notes");
        assert_eq!(s.sort_key(), u32::MAX);
    }

    #[test]
    fn number_only_has_empty_slug() {
        let s = parse_stem("007");
        assert_eq!(s.number, Some(7));
        assert_eq!(s.slug, "");
        let trailing = parse_stem("007-");
        assert_eq!(trailing.number, Some(7));
        assert_eq!(trailing.slug, "");
    }

    #[test]
    fn mixed_prefix_is_not_a_number() {
        let s = parse_stem("v2-launch");
        assert_eq!(s.number, None);
        assert_eq!(s.slug, "v2-launch");
    }

    #[test]
    fn year_like_prefix_is_a_number() {
        let s = parse_stem("2024-recap");
        assert_eq!(s.number, Some(2024));
        assert_eq!(s.slug, "recap");
    }
}

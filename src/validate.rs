//! Field-level validation for the site's forms and authored content.
//!
//! Each schema returns every failing field at once so a caller can show all
//! messages together. Lengths are counted in characters after trimming.
//!
//! | Schema | Rules |
//! |--------|-------|
//! | contact | name ≥ 2, valid email, subject ≥ 5, message ≥ 10 |
//! | newsletter | valid email |
//! | project filter | year within 2020..=current year when given |
//! | blog post | title ≥ 5, description ≥ 10, content ≥ 50, at least one tag |
//!
//! The same minimums are emitted as `minlength` attributes on the generated
//! contact form, so the browser and the CLI agree on what is acceptable.

use crate::query::ProjectFilter;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub const NAME_MIN: usize = 2;
pub const SUBJECT_MIN: usize = 5;
pub const MESSAGE_MIN: usize = 10;
pub const POST_TITLE_MIN: usize = 5;
pub const POST_DESCRIPTION_MIN: usize = 10;
pub const POST_CONTENT_MIN: usize = 50;
pub const FILTER_YEAR_MIN: i32 = 2020;

const EMAIL_MESSAGE: &str = "Please enter a valid email address";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All failing fields of one submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", join_errors(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|e| e.field).collect()
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Default)]
struct Collector(Vec<FieldError>);

impl Collector {
    fn min_chars(&mut self, field: &'static str, label: &str, value: &str, min: usize) {
        if value.trim().chars().count() < min {
            self.push(field, format!("{label} must be at least {min} characters"));
        }
    }

    fn email(&mut self, field: &'static str, value: &str) {
        if !is_valid_email(value.trim()) {
            self.push(field, EMAIL_MESSAGE.to_string());
        }
    }

    fn push(&mut self, field: &'static str, message: String) {
        self.0.push(FieldError { field, message });
    }

    fn finish(self) -> Result<(), ValidationErrors> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.0))
        }
    }
}

/// Contact form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub fn contact(form: &ContactForm) -> Result<(), ValidationErrors> {
    let mut c = Collector::default();
    c.min_chars("name", "Name", &form.name, NAME_MIN);
    c.email("email", &form.email);
    c.min_chars("subject", "Subject", &form.subject, SUBJECT_MIN);
    c.min_chars("message", "Message", &form.message, MESSAGE_MIN);
    c.finish()
}

pub fn newsletter(email: &str) -> Result<(), ValidationErrors> {
    let mut c = Collector::default();
    c.email("email", email);
    c.finish()
}

/// The category is already constrained by its type; only the year is checked.
pub fn project_filter(filter: &ProjectFilter, current_year: i32) -> Result<(), ValidationErrors> {
    let mut c = Collector::default();
    if let Some(year) = filter.year
        && !(FILTER_YEAR_MIN..=current_year).contains(&year)
    {
        c.push(
            "year",
            format!("Year must be between {FILTER_YEAR_MIN} and {current_year}"),
        );
    }
    c.finish()
}

/// Fields of an authored blog post as seen by the validator.
#[derive(Debug, Clone, Copy)]
pub struct BlogPostFields<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub content: &'a str,
    pub tags: &'a [String],
}

pub fn blog_post(post: &BlogPostFields<'_>) -> Result<(), ValidationErrors> {
    let mut c = Collector::default();
    c.min_chars("title", "Title", post.title, POST_TITLE_MIN);
    c.min_chars(
        "description",
        "Description",
        post.description,
        POST_DESCRIPTION_MIN,
    );
    c.min_chars("content", "Content", post.content, POST_CONTENT_MIN);
    if !post.tags.iter().any(|t| !t.trim().is_empty()) {
        c.push("tags", "At least one tag is required".to_string());
    }
    c.finish()
}

/// Pragmatic address check: `local@domain.tld`, no whitespace, no empty
/// domain labels, alphabetic TLD of two or more letters.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || local.starts_with('.') || local.ends_with('.')
    {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty() || l.starts_with('-')) {
        return false;
    }
    labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
}

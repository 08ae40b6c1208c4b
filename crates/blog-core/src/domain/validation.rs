//! Field-level constraint checks shared by drafts and patches.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub(crate) const TITLE_MIN: usize = 5;
pub(crate) const TITLE_MAX: usize = 255;
pub(crate) const BODY_MAX: usize = 5000;
pub(crate) const EXCERPT_MAX: usize = 255;

/// Parse a client-supplied date string.
///
/// Accepts RFC 3339 timestamps, bare dates (`2024-01-01`) and naive
/// datetimes (`2024-01-01 12:00:00`); anything else is a validation
/// failure at the boundary, never a silent default.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    None
}

pub(crate) fn check_title(errors: &mut Vec<String>, title: &str) {
    let len = title.chars().count();
    if !(TITLE_MIN..=TITLE_MAX).contains(&len) {
        errors.push(format!(
            "title: must be between {TITLE_MIN} and {TITLE_MAX} characters"
        ));
    }
}

pub(crate) fn check_author(errors: &mut Vec<String>, author: &str) {
    if author.trim().is_empty() {
        errors.push("author: must not be empty".to_owned());
    }
}

pub(crate) fn check_body(errors: &mut Vec<String>, body: &str) {
    if body.chars().count() > BODY_MAX {
        errors.push(format!("body: must be at most {BODY_MAX} characters"));
    }
}

pub(crate) fn check_category(errors: &mut Vec<String>, category: &[String]) {
    if category.is_empty() || category.iter().all(|c| c.trim().is_empty()) {
        errors.push("category: at least one category is required".to_owned());
    }
}

pub(crate) fn check_excerpt(errors: &mut Vec<String>, excerpt: &str) {
    if excerpt.chars().count() > EXCERPT_MAX {
        errors.push(format!("excerpt: must be at most {EXCERPT_MAX} characters"));
    }
}

pub(crate) fn check_date(errors: &mut Vec<String>, date: &str) {
    if parse_date(date).is_none() {
        errors.push("date: must be a valid date".to_owned());
    }
}

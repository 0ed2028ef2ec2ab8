//! Display helpers for rendered pages. All output is Spanish (es-ES).

use crate::domain::model::Post;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

pub const PRESENT_LABEL: &str = "Presente";

const SHORT_MONTHS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

const WORDS_PER_MINUTE: usize = 200;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

fn short_month(month: u32) -> &'static str {
    SHORT_MONTHS[(month as usize - 1) % 12]
}

/// Renders an experience period (`YYYY-MM` or `present`) as e.g. `ene 2024`.
///
/// Input that is neither is returned unchanged.
pub fn format_period(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }

    if value.eq_ignore_ascii_case("present") || value.eq_ignore_ascii_case("presente") {
        return PRESENT_LABEL.to_string();
    }

    match NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d") {
        Ok(date) => format!("{} {}", short_month(date.month()), date.year()),
        Err(_) => value.to_string(),
    }
}

/// Renders a WordPress publish timestamp as e.g. `15 ene 2024`.
pub fn format_post_date(value: &str) -> String {
    let date = DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"));

    match date {
        Ok(date) => format!("{} {} {}", date.day(), short_month(date.month()), date.year()),
        Err(_) => value.to_string(),
    }
}

pub fn extract_featured_image(post: &Post) -> String {
    post.embedded
        .as_ref()
        .and_then(|embedded| embedded.featured_media.as_ref())
        .and_then(|media| media.first())
        .map(|media| media.source_url.clone())
        .unwrap_or_default()
}

/// Names of the post's categories (the first embedded term group).
pub fn extract_categories(post: &Post) -> Vec<String> {
    post.embedded
        .as_ref()
        .and_then(|embedded| embedded.terms.as_ref())
        .and_then(|groups| groups.first())
        .map(|terms| terms.iter().map(|term| term.name.clone()).collect())
        .unwrap_or_default()
}

/// Removes anything shaped like a tag, then trims.
///
/// Not an HTML parser: a `>` inside a quoted attribute value ends the tag early.
pub fn strip_html(html: &str) -> String {
    TAG_RE.replace_all(html, "").trim().to_string()
}

/// Splits a comma-joined technology field into trimmed, non-empty names.
pub fn parse_tech_list(text: Option<&str>) -> Vec<String> {
    text.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|tech| !tech.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn reading_time_minutes(html: &str) -> usize {
    let words = strip_html(html).split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

//! Slug derivation for stored articles.
//!
//! A slug is `{YYYY-MM-DD}-{slugified-title}-{12-hex id}` where the id is
//! content-addressed from the article URL. Recomputing the slug for the same
//! `(title, date, url)` triple always reproduces the stored value.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

const MAX_TITLE_SLUG_CHARS: usize = 80;
const ID_BYTES: usize = 6;

static NON_SLUG_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());
static SEPARATOR_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s]+").unwrap());

/// Lowercase a title into a URL-safe dash-separated form, capped at 80 chars.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned = NON_SLUG_CHARS.replace_all(&lowered, "");
    let dashed = SEPARATOR_RUNS.replace_all(&cleaned, "-");
    dashed
        .trim_matches('-')
        .chars()
        .take(MAX_TITLE_SLUG_CHARS)
        .collect::<String>()
        .trim_end_matches('-')
        .to_string()
}

/// Short content-addressed identifier: 12 hex chars of BLAKE3(url).
pub fn article_id(url: &str) -> String {
    let hash = blake3::hash(url.as_bytes());
    hex::encode(&hash.as_bytes()[..ID_BYTES])
}

/// Full slug for an article, used as filename stem and output path segment.
pub fn article_slug(title: &str, date: DateTime<Utc>, url: &str) -> String {
    format!(
        "{}-{}-{}",
        date.format("%Y-%m-%d"),
        slugify(title),
        article_id(url)
    )
}

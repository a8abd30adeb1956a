use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored timestamp format: UTC, ISO-8601, second precision, fixed width.
/// Lexical comparison of rendered values matches chronological order.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A raw feed entry as delivered by the parser, before filtering
#[derive(Debug, Clone, Default)]
pub struct RawEntry {
    pub link: Option<String>,
    /// May contain HTML
    pub title: String,
    /// May contain HTML
    pub description: Option<String>,
    /// Publish time resolved from `published` or `updated`
    pub published: Option<DateTime<Utc>>,
}

/// A persisted article: one `.md` file per value, append-only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    /// Canonical source link; unique across the store's lifetime
    pub url: String,
    pub source: String,
    pub category: String,
    /// Rendered with [`DATE_FORMAT`]
    pub date: String,
    pub slug: String,
    /// Body text; stored below the metadata header, not inside it
    #[serde(skip)]
    pub summary: String,
}

impl Article {
    /// Slug used for the output page; an empty slug degrades to "untitled"
    /// rather than being dropped.
    pub fn page_slug(&self) -> &str {
        if self.slug.is_empty() {
            "untitled"
        } else {
            &self.slug
        }
    }
}

use feed_rs::parser;

use super::models::RawEntry;
use crate::{Error, Result};

/// Parse RSS/Atom content into raw entries.
///
/// Titles default to "Untitled"; the description falls back from the entry
/// summary to the content body; the publish time falls back from `published`
/// to `updated` and stays `None` when the feed carries neither.
pub fn parse_entries(content: &[u8]) -> Result<Vec<RawEntry>> {
    let feed = parser::parse(content).map_err(|e| Error::FeedParse(e.to_string()))?;

    Ok(feed
        .entries
        .into_iter()
        .map(|entry| {
            let link = entry.links.first().map(|l| l.href.clone());

            let title = entry
                .title
                .map(|t| t.content)
                .unwrap_or_else(|| "Untitled".to_string());

            let description = entry
                .summary
                .map(|s| s.content)
                .or_else(|| entry.content.and_then(|c| c.body));

            let published = entry.published.or(entry.updated);

            RawEntry {
                link,
                title,
                description,
                published,
            }
        })
        .collect())
}

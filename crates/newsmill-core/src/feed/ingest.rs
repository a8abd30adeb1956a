//! Entry-to-article transformation: dedupe, cutoff filtering, sanitization,
//! summarization fallback, and slug assembly.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::fetcher::FeedFetcher;
use super::models::{Article, RawEntry, DATE_FORMAT};
use super::sanitize::{strip_html, truncate_description, MAX_DESCRIPTION_CHARS};
use crate::ai::{Summarizer, SummaryInput, SummaryOutcome};
use crate::config::FeedConfig;
use crate::slug::article_slug;

/// Fetch one feed and turn its entries into new articles.
///
/// Retrieval and parse failures are isolated here: the feed is logged and
/// skipped, and the run continues with the next one.
pub async fn fetch_feed(
    fetcher: &FeedFetcher,
    feed: &FeedConfig,
    existing_urls: &mut HashSet<String>,
    cutoff_date: DateTime<Utc>,
    summarizer: Option<&Summarizer>,
) -> Vec<Article> {
    tracing::info!("Fetching: {}", feed.name);

    let entries = match fetcher.fetch(&feed.url).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Skipping feed '{}': {}", feed.name, e);
            return Vec::new();
        }
    };

    let articles = ingest_entries(feed, entries, existing_urls, cutoff_date, summarizer).await;
    tracing::info!("Feed '{}': {} new articles", feed.name, articles.len());
    articles
}

/// Fetch every feed in order and collect the new articles.
pub async fn fetch_all(
    fetcher: &FeedFetcher,
    feeds: &[FeedConfig],
    existing_urls: &mut HashSet<String>,
    cutoff_date: DateTime<Utc>,
    summarizer: Option<&Summarizer>,
) -> Vec<Article> {
    let mut articles = Vec::new();
    for feed in feeds {
        articles.extend(fetch_feed(fetcher, feed, existing_urls, cutoff_date, summarizer).await);
    }
    articles
}

/// Transform raw entries into articles.
///
/// Entries without a link, already-seen links, and entries strictly older
/// than the cutoff are skipped. Each accepted link is added to
/// `existing_urls` immediately so overlapping feeds in the same run cannot
/// produce duplicates.
pub async fn ingest_entries(
    feed: &FeedConfig,
    entries: Vec<RawEntry>,
    existing_urls: &mut HashSet<String>,
    cutoff_date: DateTime<Utc>,
    summarizer: Option<&Summarizer>,
) -> Vec<Article> {
    let mut articles = Vec::new();

    for entry in entries {
        let Some(link) = entry.link.filter(|l| !l.is_empty()) else {
            continue;
        };
        if existing_urls.contains(&link) {
            continue;
        }

        // Absent or unparseable dates default to now; such entries always
        // pass the cutoff.
        let date = match entry.published {
            Some(published) if published < cutoff_date => continue,
            Some(published) => published,
            None => Utc::now(),
        };

        let title = strip_html(&entry.title);
        let description =
            truncate_description(entry.description.as_deref().unwrap_or(""), MAX_DESCRIPTION_CHARS);

        let summary = match summarizer {
            Some(summarizer) => {
                let input = SummaryInput {
                    title: title.clone(),
                    description: description.clone(),
                    source: feed.name.clone(),
                };
                match summarizer.try_summarize(&input).await {
                    SummaryOutcome::Generated(text) => text,
                    SummaryOutcome::Fallback => description.clone(),
                }
            }
            None => description.clone(),
        };

        let slug = article_slug(&title, date, &link);
        existing_urls.insert(link.clone());

        articles.push(Article {
            title,
            url: link,
            source: feed.name.clone(),
            category: feed.category.clone(),
            date: date.format(DATE_FORMAT).to_string(),
            summary,
            slug,
        });
    }

    articles
}

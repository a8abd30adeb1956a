mod fetcher;
mod ingest;
mod models;
mod parser;
pub mod sanitize;

pub use fetcher::FeedFetcher;
pub use ingest::{fetch_all, fetch_feed, ingest_entries};
pub use models::{Article, RawEntry, DATE_FORMAT};
pub use parser::parse_entries;

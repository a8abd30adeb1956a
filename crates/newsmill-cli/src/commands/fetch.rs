use anyhow::Result;
use chrono::{Duration, Utc};

use newsmill_core::{
    ai::Summarizer,
    feed::{fetch_feed, FeedFetcher},
    store::ArticleStore,
    AppConfig, FeedList,
};

pub async fn run(config: &AppConfig) -> Result<()> {
    let feed_list = FeedList::load(&config.paths.feeds_file)?;
    let store = ArticleStore::new(&config.paths.articles_dir);

    let mut existing_urls = store.existing_urls();
    tracing::info!("{} articles already stored", existing_urls.len());

    let cutoff_date = Utc::now() - Duration::days(config.fetch.cutoff_days as i64);
    let fetcher = FeedFetcher::new(&config.fetch)?;
    let summarizer = Summarizer::from_config(&config.ai)?;

    let mut total_new = 0;
    for feed in &feed_list.feeds {
        let articles = fetch_feed(
            &fetcher,
            feed,
            &mut existing_urls,
            cutoff_date,
            summarizer.as_ref(),
        )
        .await;

        // Persist in discovery order, immediately after each feed yields
        for article in articles {
            let path = store.write(&article)?;
            tracing::info!("Wrote: {}", path.display());
            total_new += 1;
        }
    }

    println!("\nDone. {} new articles fetched.", total_new);

    Ok(())
}

use anyhow::Result;

use newsmill_core::{site::build_site, store::ArticleStore, AppConfig};

pub fn run(config: &AppConfig) -> Result<()> {
    let store = ArticleStore::new(&config.paths.articles_dir);

    let articles = store.load_all();
    tracing::info!("Loaded {} articles", articles.len());

    let report = build_site(config, &articles)?;

    println!(
        "\nSite built to {} ({} article pages).",
        config.paths.output_dir.display(),
        report.articles
    );

    Ok(())
}

//! Full-site build: clears the output directory and renders everything
//! from the stored articles. There is no incremental mode; a render or
//! write failure for any page aborts the build.

use std::fs;
use std::path::Path;

use chrono::DateTime;

use super::{assets, pages, sitemap};
use crate::config::AppConfig;
use crate::feed::Article;
use crate::Result;

const INDEX_ARTICLE_LIMIT: usize = 30;

/// Counts reported back to the caller after a successful build
#[derive(Debug, Default)]
pub struct BuildReport {
    pub articles: usize,
    pub assets: usize,
}

/// Render the whole output tree from the given articles.
///
/// Articles are expected pre-sorted by date descending (the store loads
/// them that way).
pub fn build_site(config: &AppConfig, articles: &[Article]) -> Result<BuildReport> {
    let out = &config.paths.output_dir;

    if out.exists() {
        fs::remove_dir_all(out)?;
    }
    fs::create_dir_all(out)?;

    let copied = assets::copy_static(&config.paths.static_dir, &out.join("static"))?;
    if copied > 0 {
        tracing::info!("Copied {} static files", copied);
    }

    let categories = group_by(articles, |a| a.category.clone());

    let latest = articles.iter().take(INDEX_ARTICLE_LIMIT).collect::<Vec<_>>();
    write_page(
        &out.join("index.html"),
        &pages::render_index(&config.site, &latest, &categories),
    )?;

    let article_dir = out.join("article");
    fs::create_dir_all(&article_dir)?;
    for article in articles {
        write_page(
            &article_dir.join(format!("{}.html", article.page_slug())),
            &pages::render_article(&config.site, article),
        )?;
    }
    tracing::info!("Built {} article pages", articles.len());

    let months = group_by(articles, month_key);
    write_page(
        &out.join("archive.html"),
        &pages::render_archive(&config.site, &months, articles.len()),
    )?;

    let xml = sitemap::Sitemap::build(&config.site, articles).into_xml();
    fs::write(out.join("sitemap.xml"), xml)?;

    fs::write(out.join("robots.txt"), sitemap::robots_txt(&config.site))?;

    Ok(BuildReport {
        articles: articles.len(),
        assets: copied,
    })
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html)?;
    Ok(())
}

/// Group articles by a derived key, preserving first-occurrence order of
/// the keys and document order within each group.
fn group_by<F>(articles: &[Article], key: F) -> Vec<(String, Vec<&Article>)>
where
    F: Fn(&Article) -> String,
{
    let mut groups: Vec<(String, Vec<&Article>)> = Vec::new();

    for article in articles {
        let k = key(article);
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, members)) => members.push(article),
            None => groups.push((k, vec![article])),
        }
    }

    groups
}

/// Calendar month bucket ("June 2025"); unparseable dates land in "Unknown".
fn month_key(article: &Article) -> String {
    match DateTime::parse_from_rfc3339(&article.date) {
        Ok(date) => date.format("%B %Y").to_string(),
        Err(_) => "Unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, PathsConfig};

    fn article(url: &str, category: &str, date: &str, slug: &str) -> Article {
        Article {
            title: format!("Title for {}", slug),
            url: url.to_string(),
            source: "Feed".to_string(),
            category: category.to_string(),
            date: date.to_string(),
            slug: slug.to_string(),
            summary: "Summary.".to_string(),
        }
    }

    fn test_config(root: &Path) -> AppConfig {
        AppConfig {
            paths: PathsConfig {
                articles_dir: root.join("content/articles"),
                static_dir: root.join("static"),
                output_dir: root.join("_site"),
                feeds_file: root.join("feeds.toml"),
            },
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_group_by_category_preserves_first_occurrence_order() {
        let articles = vec![
            article("https://x.com/1", "a", "2025-06-03T00:00:00Z", "one"),
            article("https://x.com/2", "b", "2025-06-02T00:00:00Z", "two"),
            article("https://x.com/3", "a", "2025-06-01T00:00:00Z", "three"),
        ];

        let groups = group_by(&articles, |a| a.category.clone());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "a");
        assert_eq!(groups[1].0, "b");
        assert_eq!(
            groups[0].1.iter().map(|a| a.url.as_str()).collect::<Vec<_>>(),
            vec!["https://x.com/1", "https://x.com/3"]
        );
        assert_eq!(groups[1].1.len(), 1);
    }

    #[test]
    fn test_month_key() {
        let ok = article("https://x.com/1", "a", "2025-06-01T10:00:00Z", "s");
        assert_eq!(month_key(&ok), "June 2025");

        let bad = article("https://x.com/2", "a", "not a date", "s");
        assert_eq!(month_key(&bad), "Unknown");

        let empty = article("https://x.com/3", "a", "", "s");
        assert_eq!(month_key(&empty), "Unknown");
    }

    #[test]
    fn test_empty_store_still_builds_core_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());

        let report = build_site(&config, &[]).unwrap();
        assert_eq!(report.articles, 0);

        let out = &config.paths.output_dir;
        assert!(out.join("index.html").exists());
        assert!(out.join("archive.html").exists());
        assert!(out.join("robots.txt").exists());

        let archive = fs::read_to_string(out.join("archive.html")).unwrap();
        assert!(archive.contains("0 articles in total."));

        let xml = fs::read_to_string(out.join("sitemap.xml")).unwrap();
        assert_eq!(xml.matches("<url>").count(), 2);
    }

    #[test]
    fn test_full_build_renders_article_pages() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());

        let articles = vec![
            article("https://x.com/1", "research", "2025-06-02T00:00:00Z", "2025-06-02-a-aaa"),
            article("https://x.com/2", "general", "2025-06-01T00:00:00Z", "2025-06-01-b-bbb"),
        ];

        let report = build_site(&config, &articles).unwrap();
        assert_eq!(report.articles, 2);

        let out = &config.paths.output_dir;
        assert!(out.join("article/2025-06-02-a-aaa.html").exists());
        assert!(out.join("article/2025-06-01-b-bbb.html").exists());

        let index = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.contains("research (1)"));
        assert!(index.contains("general (1)"));

        let xml = fs::read_to_string(out.join("sitemap.xml")).unwrap();
        assert_eq!(xml.matches("<priority>0.6</priority>").count(), 2);
    }

    #[test]
    fn test_rebuild_clears_stale_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());

        fs::create_dir_all(&config.paths.output_dir).unwrap();
        fs::write(config.paths.output_dir.join("stale.html"), "old").unwrap();

        build_site(&config, &[]).unwrap();
        assert!(!config.paths.output_dir.join("stale.html").exists());
    }

    #[test]
    fn test_static_assets_are_copied() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());

        fs::create_dir_all(&config.paths.static_dir).unwrap();
        fs::write(config.paths.static_dir.join("style.css"), "body {}").unwrap();

        let report = build_site(&config, &[]).unwrap();
        assert_eq!(report.assets, 1);
        assert!(config.paths.output_dir.join("static/style.css").exists());
    }
}

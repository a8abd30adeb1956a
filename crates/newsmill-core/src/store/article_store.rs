use std::collections::HashSet;
use std::path::PathBuf;

use crate::feed::Article;
use crate::Result;

use super::frontmatter;

/// File-backed article store: one `.md` file per article, append-only.
pub struct ArticleStore {
    dir: PathBuf,
}

impl ArticleStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Collect the URLs of every stored article.
    ///
    /// Malformed files are skipped with a warning; a missing directory is an
    /// empty store.
    pub fn existing_urls(&self) -> HashSet<String> {
        let mut urls = HashSet::new();
        for (path, text) in self.read_article_files() {
            match frontmatter::parse(&text) {
                Ok(article) => {
                    urls.insert(article.url);
                }
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", path.display(), e);
                }
            }
        }
        urls
    }

    /// Load every stored article, sorted by date descending.
    ///
    /// Dates are fixed-width ISO-8601, so lexical comparison orders them;
    /// articles with a missing date sort last.
    pub fn load_all(&self) -> Vec<Article> {
        let mut articles = Vec::new();
        for (path, text) in self.read_article_files() {
            match frontmatter::parse(&text) {
                Ok(article) => articles.push(article),
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", path.display(), e);
                }
            }
        }

        articles.sort_by(|a, b| b.date.cmp(&a.date));
        articles
    }

    /// Write a new article as `{slug}.md`. Existing files are never
    /// rewritten; the store is append-only.
    pub fn write(&self, article: &Article) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.dir.join(format!("{}.md", article.slug));
        if path.exists() {
            tracing::debug!("Already stored: {}", path.display());
            return Ok(path);
        }

        std::fs::write(&path, frontmatter::render(article)?)?;
        Ok(path)
    }

    fn read_article_files(&self) -> Vec<(PathBuf, String)> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut files = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "md") {
                match std::fs::read_to_string(&path) {
                    Ok(text) => files.push((path, text)),
                    Err(e) => {
                        tracing::warn!("Cannot read {}: {}", path.display(), e);
                    }
                }
            }
        }
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(url: &str, date: &str, slug: &str) -> Article {
        Article {
            title: "Title".to_string(),
            url: url.to_string(),
            source: "Feed".to_string(),
            category: "general".to_string(),
            date: date.to_string(),
            slug: slug.to_string(),
            summary: "Summary.".to_string(),
        }
    }

    #[test]
    fn test_write_then_scan_urls() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArticleStore::new(dir.path());

        store
            .write(&article("https://x.com/1", "2025-06-01T10:00:00Z", "2025-06-01-a-aaaa"))
            .unwrap();
        store
            .write(&article("https://x.com/2", "2025-06-02T10:00:00Z", "2025-06-02-b-bbbb"))
            .unwrap();

        let urls = store.existing_urls();
        assert_eq!(urls.len(), 2);
        assert!(urls.contains("https://x.com/1"));
        assert!(urls.contains("https://x.com/2"));
    }

    #[test]
    fn test_load_all_sorted_date_descending() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArticleStore::new(dir.path());

        store
            .write(&article("https://x.com/old", "2025-05-01T10:00:00Z", "old"))
            .unwrap();
        store
            .write(&article("https://x.com/new", "2025-06-01T10:00:00Z", "new"))
            .unwrap();
        store.write(&article("https://x.com/undated", "", "undated")).unwrap();

        let articles = store.load_all();
        let urls: Vec<&str> = articles.iter().map(|a| a.url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["https://x.com/new", "https://x.com/old", "https://x.com/undated"]
        );
    }

    #[test]
    fn test_malformed_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArticleStore::new(dir.path());

        store
            .write(&article("https://x.com/1", "2025-06-01T10:00:00Z", "good"))
            .unwrap();
        std::fs::write(dir.path().join("broken.md"), "not an article").unwrap();

        assert_eq!(store.existing_urls().len(), 1);
        assert_eq!(store.load_all().len(), 1);
    }

    #[test]
    fn test_missing_directory_is_empty_store() {
        let store = ArticleStore::new("/nonexistent/newsmill-test");
        assert!(store.existing_urls().is_empty());
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_existing_file_is_never_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArticleStore::new(dir.path());

        let first = article("https://x.com/1", "2025-06-01T10:00:00Z", "same-slug");
        let path = store.write(&first).unwrap();

        let mut second = first.clone();
        second.summary = "Different body.".to_string();
        store.write(&second).unwrap();

        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.contains("Summary."));
        assert!(!text.contains("Different body."));
    }
}

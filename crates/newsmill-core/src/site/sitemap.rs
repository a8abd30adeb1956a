//! Sitemap and robots output for search engine crawlers.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use std::borrow::Cow;

use crate::config::SiteConfig;
use crate::feed::Article;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const PRIORITY_HOME: &str = "1.0";
const PRIORITY_ARCHIVE: &str = "0.8";
const PRIORITY_ARTICLE: &str = "0.6";

pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    priority: &'static str,
}

impl Sitemap {
    /// Site root, archive page, then one entry per article page.
    pub fn build(site: &SiteConfig, articles: &[Article]) -> Self {
        let base = site.base_url();

        let mut urls = vec![
            UrlEntry {
                loc: format!("{}/", base),
                priority: PRIORITY_HOME,
            },
            UrlEntry {
                loc: format!("{}/archive.html", base),
                priority: PRIORITY_ARCHIVE,
            },
        ];

        urls.extend(articles.iter().map(|article| UrlEntry {
            loc: format!("{}/article/{}.html", base, article.page_slug()),
            priority: PRIORITY_ARTICLE,
        }));

        Self { urls }
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n    <priority>");
            xml.push_str(entry.priority);
            xml.push_str("</priority>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// robots.txt allowing all crawling and pointing at the sitemap.
pub fn robots_txt(site: &SiteConfig) -> String {
    format!(
        "User-agent: *\nAllow: /\nSitemap: {}/sitemap.xml\n",
        site.base_url()
    )
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

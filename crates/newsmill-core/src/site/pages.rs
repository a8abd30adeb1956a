//! HTML page rendering. Pages are composed in code; the output is plain
//! semantic HTML with a single shared layout.

use std::borrow::Cow;

use crate::config::SiteConfig;
use crate::feed::Article;

/// Escape text for safe interpolation into HTML.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;"),
    )
}

/// Shared page shell. `root` is the relative prefix back to the site root
/// ("" for top-level pages, "../" for article pages).
fn layout(site: &SiteConfig, page_title: &str, root: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="description" content="{description}">
<title>{page_title}</title>
<link rel="stylesheet" href="{root}static/style.css">
</head>
<body>
<header>
<h1><a href="{root}index.html">{site_title}</a></h1>
<p>{description}</p>
<nav><a href="{root}index.html">Latest</a> · <a href="{root}archive.html">Archive</a></nav>
</header>
<main>
{body}
</main>
<footer>
<p>Generated by newsmill.</p>
</footer>
</body>
</html>
"#,
        description = escape_html(&site.description),
        page_title = escape_html(page_title),
        site_title = escape_html(&site.title),
        root = root,
        body = body,
    )
}

fn display_date(article: &Article) -> &str {
    article.date.get(..10).unwrap_or(&article.date)
}

fn article_item(article: &Article, root: &str) -> String {
    format!(
        r#"<article>
<h2><a href="{root}article/{slug}.html">{title}</a></h2>
<p class="meta">{source} · {date} · {category}</p>
<p>{summary}</p>
</article>
"#,
        root = root,
        slug = article.page_slug(),
        title = escape_html(&article.title),
        source = escape_html(&article.source),
        date = display_date(article),
        category = escape_html(&article.category),
        summary = escape_html(&article.summary),
    )
}

/// Index page: the most recent articles plus the category breakdown.
pub fn render_index(
    site: &SiteConfig,
    latest: &[&Article],
    categories: &[(String, Vec<&Article>)],
) -> String {
    let mut body = String::with_capacity(4096);

    body.push_str("<section id=\"latest\">\n<h2>Latest</h2>\n");
    for article in latest {
        body.push_str(&article_item(article, ""));
    }
    body.push_str("</section>\n");

    body.push_str("<section id=\"categories\">\n<h2>Categories</h2>\n");
    for (category, articles) in categories {
        body.push_str(&format!(
            "<h3>{} ({})</h3>\n<ul>\n",
            escape_html(category),
            articles.len()
        ));
        for article in articles {
            body.push_str(&format!(
                "<li><a href=\"article/{}.html\">{}</a></li>\n",
                article.page_slug(),
                escape_html(&article.title)
            ));
        }
        body.push_str("</ul>\n");
    }
    body.push_str("</section>\n");

    layout(site, &site.title, "", &body)
}

/// One page per stored article.
pub fn render_article(site: &SiteConfig, article: &Article) -> String {
    let body = format!(
        r#"<article>
<h2>{title}</h2>
<p class="meta">{source} · {date} · {category}</p>
<p>{summary}</p>
<p><a href="{url}" rel="noopener">Read the original at {source}</a></p>
</article>
"#,
        title = escape_html(&article.title),
        source = escape_html(&article.source),
        date = display_date(article),
        category = escape_html(&article.category),
        summary = escape_html(&article.summary),
        url = escape_html(&article.url),
    );

    layout(site, &article.title, "../", &body)
}

/// Archive page: articles grouped by calendar month, plus a total count.
pub fn render_archive(
    site: &SiteConfig,
    months: &[(String, Vec<&Article>)],
    total: usize,
) -> String {
    let mut body = String::with_capacity(4096);

    body.push_str(&format!(
        "<section id=\"archive\">\n<h2>Archive</h2>\n<p>{} articles in total.</p>\n",
        total
    ));
    for (month, articles) in months {
        body.push_str(&format!("<h3>{}</h3>\n<ul>\n", escape_html(month)));
        for article in articles {
            body.push_str(&format!(
                "<li><a href=\"article/{}.html\">{}</a> <span class=\"meta\">{}</span></li>\n",
                article.page_slug(),
                escape_html(&article.title),
                escape_html(&article.source),
            ));
        }
        body.push_str("</ul>\n");
    }
    body.push_str("</section>\n");

    layout(site, "Archive", "", &body)
}

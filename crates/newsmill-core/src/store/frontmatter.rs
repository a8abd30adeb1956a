//! Article file codec: a TOML metadata block delimited by `+++` lines,
//! a blank line, then the plain-text body (the summary).

use crate::feed::Article;
use crate::{Error, Result};

const DELIMITER: &str = "+++";

/// Render an article to its stored text form.
pub fn render(article: &Article) -> Result<String> {
    let header = toml::to_string(article).map_err(|e| Error::Store(e.to_string()))?;
    Ok(format!(
        "{DELIMITER}\n{header}{DELIMITER}\n\n{}\n",
        article.summary
    ))
}

/// Parse the stored text form back into an article.
pub fn parse(text: &str) -> Result<Article> {
    let rest = text
        .strip_prefix(DELIMITER)
        .and_then(|r| r.strip_prefix('\n'))
        .ok_or_else(|| Error::Store("missing opening +++ delimiter".to_string()))?;

    let (header, body) = rest
        .split_once("\n+++")
        .ok_or_else(|| Error::Store("missing closing +++ delimiter".to_string()))?;

    let mut article: Article =
        toml::from_str(header).map_err(|e| Error::Store(e.to_string()))?;
    article.summary = body.trim().to_string();

    Ok(article)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Article {
        Article {
            title: "GPT-5 Launches".to_string(),
            url: "https://x.com/1".to_string(),
            source: "Test Feed".to_string(),
            category: "general".to_string(),
            date: "2025-06-01T10:00:00Z".to_string(),
            slug: "2025-06-01-gpt-5-launches-abc123def456".to_string(),
            summary: "A short factual summary.".to_string(),
        }
    }

    #[test]
    fn test_round_trip() {
        let article = sample();
        let text = render(&article).unwrap();
        let parsed = parse(&text).unwrap();

        assert_eq!(parsed.title, article.title);
        assert_eq!(parsed.url, article.url);
        assert_eq!(parsed.source, article.source);
        assert_eq!(parsed.category, article.category);
        assert_eq!(parsed.date, article.date);
        assert_eq!(parsed.slug, article.slug);
        assert_eq!(parsed.summary, article.summary);
    }

    #[test]
    fn test_rendered_layout() {
        let text = render(&sample()).unwrap();
        assert!(text.starts_with("+++\n"));
        assert!(text.contains("title = \"GPT-5 Launches\""));
        assert!(text.contains("url = \"https://x.com/1\""));
        assert!(text.ends_with("A short factual summary.\n"));
        // Summary sits below the metadata block, not inside it
        let closing = text.rfind("+++").unwrap();
        assert!(text[closing..].contains("A short factual summary."));
    }

    #[test]
    fn test_parse_rejects_missing_header() {
        assert!(matches!(parse("no frontmatter here"), Err(Error::Store(_))));
        assert!(matches!(parse("+++\ntitle = \"x\"\nno closing"), Err(Error::Store(_))));
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        let text = "+++\ntitle = \"only a title\"\n+++\n\nbody\n";
        assert!(matches!(parse(text), Err(Error::Store(_))));
    }

    #[test]
    fn test_title_with_quotes_survives() {
        let mut article = sample();
        article.title = "He said \"hello\" & left".to_string();
        let text = render(&article).unwrap();
        assert_eq!(parse(&text).unwrap().title, article.title);
    }
}

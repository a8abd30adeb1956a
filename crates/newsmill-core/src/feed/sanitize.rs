//! HTML stripping and description truncation for feed entries.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

/// Truncated descriptions never exceed this many chars before the ellipsis.
pub const MAX_DESCRIPTION_CHARS: usize = 300;

static WHITESPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Reduce an HTML fragment to plain text: tags removed, entities decoded,
/// whitespace collapsed to single spaces.
pub fn strip_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(text);
    let joined = fragment
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ");

    WHITESPACE_RUNS.replace_all(joined.trim(), " ").into_owned()
}

/// Strip HTML and truncate to `max_chars` at a word boundary, appending
/// "..." when anything was cut. The result never exceeds `max_chars + 3`
/// chars and never ends mid-word.
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    let text = strip_html(text);

    let prefix = match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => return text,
    };

    let head = match prefix.rfind(' ') {
        Some(idx) => &prefix[..idx],
        None => prefix,
    };

    format!("{}...", head.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_removes_tags() {
        assert_eq!(strip_html("<p>Hello <b>world</b></p>"), "Hello world");
    }

    #[test]
    fn test_strip_html_decodes_entities() {
        assert_eq!(strip_html("Fish &amp; chips &lt;3"), "Fish & chips <3");
    }

    #[test]
    fn test_strip_html_collapses_whitespace() {
        assert_eq!(strip_html("a\n\n  b\t c"), "a b c");
        assert_eq!(strip_html("<p>a</p><p>b</p>"), "a b");
    }

    #[test]
    fn test_strip_html_empty() {
        assert_eq!(strip_html(""), "");
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_description("short text", 300), "short text");
    }

    #[test]
    fn test_truncate_at_word_boundary() {
        let out = truncate_description("word1 word2 word3 word4", 10);
        assert!(out.chars().count() <= 13, "got {:?}", out);
        assert_eq!(out, "word1...");
    }

    #[test]
    fn test_truncate_never_splits_words() {
        let text = "alpha bravo charlie delta echo foxtrot";
        for max in 5..text.len() {
            let out = truncate_description(text, max);
            let body = out.trim_end_matches("...");
            for word in body.split(' ') {
                assert!(text.split(' ').any(|w| w == word), "split word {:?} in {:?}", word, out);
            }
        }
    }

    #[test]
    fn test_truncate_strips_html_first() {
        let out = truncate_description("<p>one two three four five</p>", 9);
        assert_eq!(out, "one two...");
    }
}

mod claude;
mod openai;

pub use claude::ClaudeProvider;
pub use openai::OpenAiProvider;

use crate::Result;

/// Article fields handed to a provider for summarization
#[derive(Debug, Clone)]
pub struct SummaryInput {
    pub title: String,
    pub description: String,
    pub source: String,
}

/// Trait for AI summarization providers
#[async_trait::async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Produce a 1-2 sentence factual summary of the article.
    /// Single attempt; transport and API failures surface as errors.
    async fn summarize(&self, input: &SummaryInput) -> Result<String>;
}

pub(crate) fn truncate_chars(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((idx, _)) => &input[..idx],
        None => input,
    }
}

/// Shared prompt so every provider summarizes the same way
pub(crate) fn summary_prompt(input: &SummaryInput) -> String {
    format!(
        "Summarize this news article in 1-2 concise sentences for a news aggregator. \
Be factual and specific.\n\nTitle: {}\nSource: {}\nDescription: {}",
        input.title,
        input.source,
        truncate_chars(&input.description, 1000)
    )
}

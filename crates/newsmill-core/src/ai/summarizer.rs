use std::sync::Arc;

use super::providers::{ClaudeProvider, OpenAiProvider, SummaryProvider};
pub use super::providers::SummaryInput;
use crate::config::AiConfig;

/// Outcome of a summarization attempt. The fallback path is explicit so
/// callers (and tests) can observe degraded runs instead of inferring them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// Model-generated summary text
    Generated(String),
    /// Provider failed or returned nothing; caller substitutes the description
    Fallback,
}

/// AI summarizer wrapping the configured provider
pub struct Summarizer {
    provider: Arc<dyn SummaryProvider>,
}

impl Summarizer {
    /// Build a summarizer from configuration.
    ///
    /// Returns `None` when summarization is disabled or no credential is
    /// configured for the selected provider; that is a configuration
    /// condition, not an error. An unknown provider name is an error.
    pub fn from_config(config: &AiConfig) -> crate::Result<Option<Self>> {
        if !config.enabled {
            return Ok(None);
        }

        let provider: Arc<dyn SummaryProvider> = match config.provider.as_str() {
            "claude" => {
                let Some(api_key) = resolve_key(&config.claude_api_key, "ANTHROPIC_API_KEY") else {
                    tracing::info!("No Claude API key configured; summarization unavailable");
                    return Ok(None);
                };
                Arc::new(ClaudeProvider::new(
                    &api_key,
                    &config.claude_model,
                    config.max_summary_tokens,
                )?)
            }
            "openai" => {
                let Some(api_key) = resolve_key(&config.openai_api_key, "OPENAI_API_KEY") else {
                    tracing::info!("No OpenAI API key configured; summarization unavailable");
                    return Ok(None);
                };
                Arc::new(OpenAiProvider::new(
                    &api_key,
                    &config.openai_model,
                    config.max_summary_tokens,
                ))
            }
            other => {
                return Err(crate::Error::Config(format!("Unknown AI provider: {}", other)));
            }
        };

        Ok(Some(Self { provider }))
    }

    /// Wrap an explicit provider; used by tests to substitute a fake.
    pub fn with_provider(provider: Arc<dyn SummaryProvider>) -> Self {
        Self { provider }
    }

    /// Single summarization attempt, no retry. Failures are logged and
    /// reported as [`SummaryOutcome::Fallback`]; they never propagate.
    pub async fn try_summarize(&self, input: &SummaryInput) -> SummaryOutcome {
        match self.provider.summarize(input).await {
            Ok(text) if !text.trim().is_empty() => SummaryOutcome::Generated(text),
            Ok(_) => {
                tracing::warn!("Empty summary for '{}', using description", input.title);
                SummaryOutcome::Fallback
            }
            Err(e) => {
                tracing::warn!("Summarization failed for '{}': {}", input.title, e);
                SummaryOutcome::Fallback
            }
        }
    }
}

fn resolve_key(configured: &Option<String>, env_var: &str) -> Option<String> {
    configured
        .clone()
        .or_else(|| std::env::var(env_var).ok())
        .filter(|k| !k.is_empty())
}

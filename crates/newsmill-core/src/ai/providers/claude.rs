use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{summary_prompt, SummaryInput, SummaryProvider};
use crate::{Error, Result};

const AI_REQUEST_TIMEOUT_SECS: u64 = 30;
const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";

#[derive(Serialize)]
struct ClaudeRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<ClaudeMessage>,
}

#[derive(Serialize)]
struct ClaudeMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ClaudeResponse {
    content: Option<Vec<ClaudeContent>>,
    error: Option<ClaudeError>,
}

#[derive(Deserialize)]
struct ClaudeContent {
    text: String,
}

#[derive(Deserialize)]
struct ClaudeError {
    message: String,
}

/// Claude/Anthropic API provider
pub struct ClaudeProvider {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl ClaudeProvider {
    pub fn new(api_key: &str, model: &str, max_tokens: u32) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(AI_REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            model: model.to_string(),
            max_tokens,
        })
    }

    async fn chat(&self, prompt: &str) -> Result<String> {
        let request = ClaudeRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![ClaudeMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::AiProvider(format!("Claude API request failed: {}", e)))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::AiProvider(format!("Failed to read Claude response: {}", e)))?;
        let claude_response: ClaudeResponse = serde_json::from_slice(&body)
            .map_err(|e| Error::AiProvider(format!("Failed to parse Claude response: {}", e)))?;

        if let Some(error) = claude_response.error {
            return Err(Error::AiProvider(format!("Claude API error: {}", error.message)));
        }

        let content = claude_response
            .content
            .and_then(|c| c.into_iter().next())
            .map(|c| c.text)
            .unwrap_or_default();

        Ok(content.trim().to_string())
    }
}

#[async_trait::async_trait]
impl SummaryProvider for ClaudeProvider {
    async fn summarize(&self, input: &SummaryInput) -> Result<String> {
        self.chat(&summary_prompt(input)).await
    }
}

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub ai: AiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Public base URL of the generated site (no trailing slash required)
    #[serde(default = "default_site_url")]
    pub url: String,
    /// Site title shown on every page
    #[serde(default = "default_site_title")]
    pub title: String,
    /// One-line site description
    #[serde(default = "default_site_description")]
    pub description: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: default_site_url(),
            title: default_site_title(),
            description: default_site_description(),
        }
    }
}

impl SiteConfig {
    /// Base URL without a trailing slash, ready for path concatenation
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding one .md file per article
    #[serde(default = "default_articles_dir")]
    pub articles_dir: PathBuf,
    /// Static assets copied verbatim into the output tree
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    /// Output directory, cleared on every build
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Feed subscription list
    #[serde(default = "default_feeds_file")]
    pub feeds_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            articles_dir: default_articles_dir(),
            static_dir: default_static_dir(),
            output_dir: default_output_dir(),
            feeds_file: default_feeds_file(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Entries older than now - cutoff_days are discarded
    #[serde(default = "default_cutoff_days")]
    pub cutoff_days: u32,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// User-Agent sent with feed requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// HTTP proxy URL for feed fetching (e.g. "http://127.0.0.1:7890")
    #[serde(default)]
    pub proxy_url: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            cutoff_days: default_cutoff_days(),
            request_timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
            proxy_url: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Enable AI summarization
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// AI provider: "claude" or "openai"
    #[serde(default = "default_ai_provider")]
    pub provider: String,
    /// Claude/Anthropic API key; falls back to ANTHROPIC_API_KEY
    #[serde(default)]
    pub claude_api_key: Option<String>,
    /// Claude model name
    #[serde(default = "default_claude_model")]
    pub claude_model: String,
    /// OpenAI API key; falls back to OPENAI_API_KEY
    #[serde(default)]
    pub openai_api_key: Option<String>,
    /// OpenAI model name
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    /// Max tokens for a generated summary
    #[serde(default = "default_max_tokens")]
    pub max_summary_tokens: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            provider: default_ai_provider(),
            claude_api_key: None,
            claude_model: default_claude_model(),
            openai_api_key: None,
            openai_model: default_openai_model(),
            max_summary_tokens: default_max_tokens(),
        }
    }
}

/// A single feed subscription from the feeds file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    pub name: String,
    pub url: String,
    #[serde(default = "default_category")]
    pub category: String,
}

#[derive(Debug, Clone, Deserialize)]
struct FeedListDocument {
    #[serde(default)]
    feeds: Vec<FeedConfig>,
}

/// Ordered list of feed subscriptions
#[derive(Debug, Clone)]
pub struct FeedList {
    pub feeds: Vec<FeedConfig>,
}

impl FeedList {
    /// Load the feed list. A missing or unreadable feeds file is fatal.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::Error::Config(format!("Cannot read feeds file {}: {}", path.display(), e))
        })?;
        let doc: FeedListDocument = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Invalid feeds file: {}", e)))?;
        Ok(Self { feeds: doc.feeds })
    }
}

fn default_site_url() -> String {
    "https://news.example.org".to_string()
}

fn default_site_title() -> String {
    "AI News".to_string()
}

fn default_site_description() -> String {
    "Curated AI and machine learning news from top sources".to_string()
}

fn default_articles_dir() -> PathBuf {
    PathBuf::from("content/articles")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("_site")
}

fn default_feeds_file() -> PathBuf {
    PathBuf::from("feeds.toml")
}

fn default_cutoff_days() -> u32 {
    7
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("newsmill/{}", env!("CARGO_PKG_VERSION"))
}

fn default_true() -> bool {
    true
}

fn default_ai_provider() -> String {
    "claude".to_string()
}

fn default_claude_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    200
}

fn default_category() -> String {
    "general".to_string()
}

impl AppConfig {
    /// Load configuration from ./newsmill.toml, then the user config dir,
    /// falling back to defaults when neither exists.
    pub fn load() -> crate::Result<Self> {
        for path in [PathBuf::from("newsmill.toml"), Self::config_path()] {
            if path.exists() {
                let content = std::fs::read_to_string(&path)?;
                return toml::from_str(&content)
                    .map_err(|e| crate::Error::Config(format!("{}: {}", path.display(), e)));
            }
        }
        Ok(Self::default())
    }

    /// ~/.config/newsmill/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("newsmill")
            .join("config.toml")
    }
}

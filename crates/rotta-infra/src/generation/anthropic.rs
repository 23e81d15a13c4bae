//! Anthropic Messages API client.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use rotta_core::ports::{GenerationError, GenerationRequest, TextGenerator};

const API_VERSION: &str = "2023-06-01";

/// Anthropic configuration.
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    /// Absent key means every call fails with `GenerationError::Config`.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Overrides the per-request token budget when set.
    pub max_tokens: Option<u32>,
    /// Overrides the per-request temperature when set.
    pub temperature: Option<f32>,
    pub timeout: Duration,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "claude-3-5-sonnet-20241022".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            max_tokens: None,
            temperature: None,
            timeout: Duration::from_secs(60),
        }
    }
}

impl AnthropicConfig {
    /// Load configuration from `ANTHROPIC_*` environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_key: env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            model: env::var("ANTHROPIC_MODEL").unwrap_or(defaults.model),
            base_url: env::var("ANTHROPIC_BASE_URL").unwrap_or(defaults.base_url),
            max_tokens: env::var("ANTHROPIC_MAX_TOKENS")
                .ok()
                .and_then(|s| s.parse().ok()),
            temperature: env::var("ANTHROPIC_TEMPERATURE")
                .ok()
                .and_then(|s| s.parse().ok()),
            timeout: env::var("ANTHROPIC_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

impl MessagesResponse {
    /// Text of the first text block.
    fn into_text(self) -> Option<String> {
        self.content.into_iter().find_map(|block| match block {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Other => None,
        })
    }
}

/// Text generator backed by the Anthropic Messages API.
pub struct AnthropicTextGenerator {
    client: reqwest::Client,
    config: AnthropicConfig,
}

impl AnthropicTextGenerator {
    pub fn new(config: AnthropicConfig) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerationError::Config(e.to_string()))?;

        if config.api_key.is_none() {
            tracing::warn!("ANTHROPIC_API_KEY not set, copy generation will fail");
        }

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'))
    }

    fn body<'a>(&'a self, request: &'a GenerationRequest) -> MessagesRequest<'a> {
        MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens.unwrap_or(request.max_tokens),
            temperature: self.config.temperature.unwrap_or(request.temperature),
            messages: vec![Message {
                role: "user",
                content: &request.prompt,
            }],
        }
    }
}

#[async_trait]
impl TextGenerator for AnthropicTextGenerator {
    async fn complete(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| GenerationError::Config("ANTHROPIC_API_KEY is not set".to_string()))?;

        tracing::debug!(model = %self.config.model, "Requesting completion");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .json(&self.body(request))
            .send()
            .await
            .map_err(|e| GenerationError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "Anthropic request rejected");
            return Err(GenerationError::Upstream(format!("{status}: {detail}")));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Upstream(e.to_string()))?;

        parsed.into_text().ok_or(GenerationError::EmptyOutput)
    }
}

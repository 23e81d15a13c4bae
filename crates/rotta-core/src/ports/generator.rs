//! Text generation port - the external LLM collaborator.

use async_trait::async_trait;

/// A single completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Text generator trait - abstraction over LLM providers.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Complete the prompt and return the raw text of the answer.
    async fn complete(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

/// Generation errors. No post is ever created after one of these.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerationError {
    #[error("Upstream provider error: {0}")]
    Upstream(String),

    #[error("Provider returned no usable text")]
    EmptyOutput,

    #[error("Generated copy is {actual} characters, limit is {limit}")]
    TooLong { limit: usize, actual: usize },

    #[error("Generator misconfigured: {0}")]
    Config(String),
}

//! Text generation backends.

#[cfg(feature = "anthropic")]
mod anthropic;

#[cfg(feature = "anthropic")]
pub use anthropic::{AnthropicConfig, AnthropicTextGenerator};

use async_trait::async_trait;
use rotta_core::ports::{GenerationError, GenerationRequest, TextGenerator};

/// Generator used when no provider is configured.
///
/// Every call fails with `GenerationError::Config`, so check-ins are still
/// recorded and only the generation step reports the problem.
pub struct UnconfiguredGenerator {
    reason: String,
}

impl UnconfiguredGenerator {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for UnconfiguredGenerator {
    async fn complete(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        Err(GenerationError::Config(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_generator_reports_config_error() {
        let generator = UnconfiguredGenerator::new("ANTHROPIC_API_KEY is not set");
        let request = GenerationRequest {
            prompt: "Ciao".to_string(),
            max_tokens: 10,
            temperature: 0.0,
        };

        let err = generator.complete(&request).await.unwrap_err();
        assert!(matches!(err, GenerationError::Config(reason) if reason.contains("ANTHROPIC")));
    }
}

//! Copy generator - turns a content seed into platform-tailored post text.

use std::sync::Arc;

use crate::domain::Platform;
use crate::ports::{GenerationError, GenerationRequest, TextGenerator};

/// Hard cap on `x` copy, the only platform whose output is checked.
pub const X_MAX_CHARS: usize = 280;

const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.3;

/// Everything the generator needs to write one post.
#[derive(Debug, Clone, PartialEq)]
pub struct CopyRequest {
    /// Weekly news or the copy of the post being replicated.
    pub seed_text: Option<String>,
    pub agency_name: String,
    pub agency_city: String,
    pub pillar: String,
    pub platform: Platform,
}

/// Tone and length instructions for each platform.
pub fn platform_instructions(platform: Platform) -> &'static str {
    match platform {
        Platform::Linkedin => {
            "Scrivi un post LinkedIn di 2-3 frasi.\n\
             Tono professionale e autorevole.\n\
             Non usare emoji.\n\
             Non usare hashtag.\n\
             Concentrati sul valore per il cliente e sulla competenza dell'agenzia."
        }
        Platform::Facebook => {
            "Scrivi un post Facebook di 2-3 frasi.\n\
             Tono caldo e accessibile, come parlare a un vicino.\n\
             Non usare emoji.\n\
             Non usare hashtag.\n\
             Concentrati sulla relazione e la fiducia."
        }
        Platform::Instagram => {
            "Scrivi una caption Instagram di 2-3 frasi.\n\
             Tono diretto e visivo, come descrivere un'immagine.\n\
             Non usare emoji.\n\
             Non usare hashtag.\n\
             Concentrati sull'emozione e l'esperienza."
        }
        Platform::Tiktok => {
            "Scrivi un testo per TikTok di 1-2 frasi.\n\
             Tono giovane, diretto, conversazionale.\n\
             Non usare emoji.\n\
             Non usare hashtag.\n\
             Vai dritto al punto, cattura l'attenzione subito."
        }
        Platform::X => {
            "Scrivi un tweet di massimo 280 caratteri.\n\
             Tono sintetico e incisivo.\n\
             Non usare emoji.\n\
             Non usare hashtag.\n\
             Una frase sola, chiara e memorabile."
        }
    }
}

/// Render the full prompt for a copy request.
pub fn build_prompt(request: &CopyRequest) -> String {
    let seed = request
        .seed_text
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("nessuna");

    format!(
        "Sei un copywriter per agenzie immobiliari.\n\n\
         Agenzia: {}, {}\n\
         Pillar: {}\n\
         Novità settimana: {}\n\n\
         {}",
        request.agency_name,
        request.agency_city,
        request.pillar,
        seed,
        platform_instructions(request.platform)
    )
}

/// Copy generator backed by an external text generator.
#[derive(Clone)]
pub struct Copywriter {
    generator: Arc<dyn TextGenerator>,
}

impl Copywriter {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Generate post copy. The trimmed answer is returned as-is; blank output
    /// and over-long `x` copy are errors.
    pub async fn generate(&self, request: &CopyRequest) -> Result<String, GenerationError> {
        let completion = GenerationRequest {
            prompt: build_prompt(request),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        tracing::debug!(
            platform = %request.platform,
            pillar = %request.pillar,
            "Requesting post copy"
        );

        let text = self.generator.complete(&completion).await.map_err(|e| {
            tracing::error!(platform = %request.platform, error = %e, "Copy generation failed");
            e
        })?;

        let text = text.trim();
        if text.is_empty() {
            tracing::error!(platform = %request.platform, "Generator returned empty copy");
            return Err(GenerationError::EmptyOutput);
        }

        if request.platform == Platform::X {
            let actual = text.chars().count();
            if actual > X_MAX_CHARS {
                return Err(GenerationError::TooLong {
                    limit: X_MAX_CHARS,
                    actual,
                });
            }
        }

        Ok(text.to_string())
    }
}

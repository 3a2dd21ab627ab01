//! Text simplification ahead of word selection.

use std::sync::{Arc, OnceLock};

use lexicard_core::prompt::simplify_prompt;
use regex::Regex;

use super::GenerationError;
use crate::providers::{CompletionService, RetryPolicy};

fn preamble() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(here is a simplified version of the (input )?text:?|simplified text:?)")
            .expect("valid preamble pattern")
    })
}

fn chatty_opening() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(here|this|following|below)").expect("valid opening pattern")
    })
}

fn first_sentence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^.!?]+[.!?]\s*").expect("valid sentence pattern"))
}

/// Strip introductory chatter the model adds despite instructions.
pub fn clean_simplified(text: &str) -> String {
    let text = text.trim();
    let text = preamble().replace(text, "");
    let text = text.trim();

    if chatty_opening().is_match(text) {
        first_sentence().replace(text, "").trim().to_string()
    } else {
        text.to_string()
    }
}

/// Rewrites text in simpler language.
#[derive(Clone)]
pub struct TextSimplifier {
    provider: Arc<dyn CompletionService>,
    retry: RetryPolicy,
}

impl TextSimplifier {
    pub fn new(provider: Arc<dyn CompletionService>, retry: RetryPolicy) -> Self {
        Self { provider, retry }
    }

    pub async fn simplify(&self, text: &str) -> Result<String, GenerationError> {
        if text.trim().is_empty() {
            return Err(GenerationError::InvalidInput("Missing text".to_string()));
        }

        let prompt = simplify_prompt(text);
        tracing::debug!("Sending simplification prompt ({} chars)", prompt.len());

        let completion = self
            .retry
            .run(|| self.provider.generate_completion(&prompt))
            .await?;

        let simplified = clean_simplified(&completion.content);
        if simplified.is_empty() {
            return Err(GenerationError::EmptyCompletion);
        }

        tracing::info!("Simplified {} chars into {} chars", text.len(), simplified.len());
        Ok(simplified)
    }
}

//! Card generation pipeline: prompt, provider under retry, parse, assemble.

use std::sync::Arc;

use lexicard_core::parser::card_draft_from_completion;
use lexicard_core::prompt::flashcard_prompt;
use lexicard_core::Card;

use super::GenerationError;
use crate::providers::{CompletionService, RetryPolicy};

/// Produces one card per (word, sentence) request.
#[derive(Clone)]
pub struct CardGenerator {
    provider: Arc<dyn CompletionService>,
    retry: RetryPolicy,
}

impl CardGenerator {
    pub fn new(provider: Arc<dyn CompletionService>, retry: RetryPolicy) -> Self {
        Self { provider, retry }
    }

    /// Generate a card for `target_word` as used in `sentence`.
    ///
    /// Only the provider call is retried. A malformed completion fails the
    /// whole request; no partial card is ever returned.
    pub async fn generate(
        &self,
        target_word: &str,
        sentence: &str,
    ) -> Result<Card, GenerationError> {
        if target_word.trim().is_empty() || sentence.trim().is_empty() {
            return Err(GenerationError::InvalidInput(
                "Missing targetWord or initialSentence".to_string(),
            ));
        }

        tracing::info!("Generating flashcard for word: {}", target_word);
        let prompt = flashcard_prompt(target_word.trim(), sentence);

        let completion = self
            .retry
            .run(|| self.provider.generate_completion(&prompt))
            .await
            .map_err(|e| {
                tracing::error!(provider = self.provider.name(), "Error from AI provider: {}", e);
                GenerationError::Provider(e)
            })?;

        tracing::debug!("AI provider response: {}", completion.content);

        let draft = card_draft_from_completion(&completion.content).map_err(|e| {
            tracing::error!("Unusable AI provider response: {}", e);
            GenerationError::from(e)
        })?;

        let card = Card::new(draft, target_word, sentence);
        tracing::info!(card_id = %card.id, "Generated flashcard for '{}'", card.word);
        Ok(card)
    }
}

//! Short practice stories built from saved phrases.

use std::sync::Arc;

use lexicard_core::parser::{parse_lines, strip_quotes};
use lexicard_core::prompt::story_prompt;
use serde::Serialize;

use super::GenerationError;
use crate::providers::{CompletionService, RetryPolicy};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Story {
    pub title: String,
    pub story: String,
}

/// Split a completion into a title line and the story body.
pub fn parse_story(raw: &str) -> Result<Story, GenerationError> {
    let lines = parse_lines(raw);
    if lines.is_empty() {
        return Err(GenerationError::EmptyCompletion);
    }
    if lines.len() < 2 {
        return Err(GenerationError::IncompleteGeneration {
            expected: 2,
            line_count: lines.len(),
            raw: raw.to_string(),
        });
    }

    let title = lines[0].trim_start_matches('#').trim();
    let title = strip_quotes(title).trim().to_string();

    Ok(Story {
        title,
        story: lines[1..].join("\n"),
    })
}

/// Writes a short story that reuses the learner's phrases.
#[derive(Clone)]
pub struct StoryWriter {
    provider: Arc<dyn CompletionService>,
    retry: RetryPolicy,
}

impl StoryWriter {
    pub fn new(provider: Arc<dyn CompletionService>, retry: RetryPolicy) -> Self {
        Self { provider, retry }
    }

    pub async fn write(&self, phrases: &[String]) -> Result<Story, GenerationError> {
        let phrases: Vec<String> = phrases
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        if phrases.is_empty() {
            return Err(GenerationError::InvalidInput("Invalid input".to_string()));
        }

        let prompt = story_prompt(&phrases);
        let completion = self
            .retry
            .run(|| self.provider.generate_completion(&prompt))
            .await?;

        let story = parse_story(&completion.content)?;
        tracing::info!("Generated story '{}' from {} phrases", story.title, phrases.len());
        Ok(story)
    }
}

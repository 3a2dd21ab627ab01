//! Generation services and the in-memory study library.

pub mod generator;
pub mod library;
pub mod simplify;
pub mod story;

use lexicard_core::ParseError;
use thiserror::Error;

use crate::providers::ProviderError;

/// Failures of a completion-backed service call.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("AI provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error(
        "incomplete data from AI provider response: expected {expected} lines, got {line_count}"
    )]
    IncompleteGeneration {
        expected: usize,
        line_count: usize,
        raw: String,
    },

    #[error("no content generated from AI provider")]
    EmptyCompletion,
}

impl GenerationError {
    /// Raw completion text kept for diagnostics, if any.
    pub fn raw_completion(&self) -> Option<&str> {
        match self {
            Self::IncompleteGeneration { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

impl From<ParseError> for GenerationError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::EmptyCompletion => Self::EmptyCompletion,
            ParseError::IncompleteGeneration { line_count, raw } => Self::IncompleteGeneration {
                expected: lexicard_core::parser::CARD_LINE_COUNT,
                line_count,
                raw,
            },
        }
    }
}

pub use generator::CardGenerator;
pub use library::StudyLibrary;
pub use simplify::TextSimplifier;
pub use story::{Story, StoryWriter};

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted completion backend for service tests.

    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::providers::{Completion, CompletionService, ProviderError};

    /// Replays queued responses; the last one repeats once the queue drains.
    pub struct ScriptedProvider {
        responses: Mutex<VecDeque<Result<String, u16>>>,
        pub calls: AtomicUsize,
        pub prompts: Mutex<Vec<String>>,
    }

    impl ScriptedProvider {
        /// `Err(status)` entries become `ProviderError::Service`.
        pub fn new(responses: Vec<Result<&str, u16>>) -> Self {
            Self {
                responses: Mutex::new(
                    responses
                        .into_iter()
                        .map(|r| r.map(str::to_string))
                        .collect(),
                ),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn replying(content: &str) -> Self {
            Self::new(vec![Ok(content)])
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionService for ScriptedProvider {
        fn name(&self) -> &'static str {
            "scripted"
        }

        async fn generate_completion(&self, prompt: &str) -> Result<Completion, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());

            let mut responses = self.responses.lock().unwrap();
            let next = if responses.len() > 1 {
                responses.pop_front()
            } else {
                responses.front().cloned()
            };
            match next {
                Some(Ok(content)) => Ok(Completion { content }),
                Some(Err(status)) => Err(ProviderError::Service {
                    status,
                    message: "scripted failure".to_string(),
                }),
                None => Err(ProviderError::EmptyContent),
            }
        }
    }
}

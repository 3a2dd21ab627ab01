//! Shared test infrastructure for the API tests.
//!
//! Every test gets a fresh in-memory library and a scripted completion
//! backend, so no network access or API keys are needed.

pub mod fixtures;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;

use lexicards_backend::providers::{Completion, CompletionService, ProviderError, RetryPolicy};
use lexicards_backend::{router, AppState};

/// Completion backend that replays canned replies in order.
///
/// The final reply repeats once the script runs out.
pub struct ScriptedCompletions {
    replies: Mutex<VecDeque<Result<String, u16>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedCompletions {
    pub fn new(replies: Vec<Result<&str, u16>>) -> Self {
        Self {
            replies: Mutex::new(
                replies
                    .into_iter()
                    .map(|r| r.map(str::to_string))
                    .collect(),
            ),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionService for ScriptedCompletions {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn generate_completion(&self, prompt: &str) -> Result<Completion, ProviderError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let mut replies = self.replies.lock().unwrap();
        let reply = if replies.len() > 1 {
            replies.pop_front()
        } else {
            replies.front().cloned()
        };

        match reply.unwrap_or(Err(500)) {
            Ok(content) => Ok(Completion { content }),
            Err(status) => Err(ProviderError::Service {
                status,
                message: "scripted failure".to_string(),
            }),
        }
    }
}

/// Test context holding the server and the backend it talks to.
pub struct TestContext {
    pub server: TestServer,
    pub completions: Arc<ScriptedCompletions>,
}

impl TestContext {
    /// Context whose backend always answers with `reply`.
    pub fn replying(reply: &str) -> Self {
        Self::scripted(vec![Ok(reply)])
    }

    pub fn scripted(replies: Vec<Result<&str, u16>>) -> Self {
        let completions = Arc::new(ScriptedCompletions::new(replies));
        // Two retries without waiting keeps the suite fast.
        let retry = RetryPolicy::new(2, Duration::ZERO);
        let state = AppState::new(completions.clone(), retry);
        let server = TestServer::new(router(state)).unwrap();

        Self {
            server,
            completions,
        }
    }

    /// Generate a card for `word` and save it, returning the saved JSON.
    pub async fn save_generated(&self, word: &str, sentence: &str) -> Value {
        let generated = self
            .server
            .post("/api/generateFlashcard")
            .json(&fixtures::generate_request(word, sentence))
            .await;
        generated.assert_status_ok();

        let saved = self
            .server
            .post("/api/cards")
            .json(&generated.json::<Value>())
            .await;
        saved.assert_status(StatusCode::CREATED);
        saved.json()
    }

    /// Save `count` cards and return their ids in save order.
    pub async fn seed_cards(&self, count: usize) -> Vec<String> {
        let mut ids = Vec::with_capacity(count);
        for i in 0..count {
            let card = self
                .save_generated(&format!("word{}", i), "A sentence.")
                .await;
            ids.push(card["id"].as_str().unwrap().to_string());
        }
        ids
    }
}

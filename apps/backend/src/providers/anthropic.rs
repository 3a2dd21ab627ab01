//! Legacy single-prompt completion backend (Anthropic text completions).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{error_from_response, non_empty, Completion, CompletionService, ProviderError};

const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS_TO_SAMPLE: u32 = 500;
const STOP_SEQUENCE: &str = "\n\nHuman:";

#[derive(Debug, Serialize)]
struct CompleteRequest<'a> {
    model: &'a str,
    prompt: String,
    max_tokens_to_sample: u32,
    stop_sequences: [&'a str; 1],
}

#[derive(Debug, Deserialize)]
struct CompleteResponse {
    completion: Option<String>,
}

/// Wrap a prompt in the Human/Assistant turn format.
fn turn_prompt(prompt: &str) -> String {
    format!("\n\nHuman: {}\n\nAssistant:", prompt)
}

/// Single-prompt completion provider.
pub struct AnthropicProvider {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl AnthropicProvider {
    pub fn new(client: Client, base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/v1/complete", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl CompletionService for AnthropicProvider {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn generate_completion(&self, prompt: &str) -> Result<Completion, ProviderError> {
        tracing::debug!("AnthropicProvider: generating completion");

        let request = CompleteRequest {
            model: &self.model,
            prompt: turn_prompt(prompt),
            max_tokens_to_sample: MAX_TOKENS_TO_SAMPLE,
            stop_sequences: [STOP_SEQUENCE],
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(ProviderError::Network)?;

        if !resp.status().is_success() {
            let error = error_from_response(resp).await;
            tracing::error!("Anthropic API error: {}", error);
            return Err(error);
        }

        let response: CompleteResponse = resp.json().await.map_err(ProviderError::Decode)?;
        non_empty(response.completion)
    }
}

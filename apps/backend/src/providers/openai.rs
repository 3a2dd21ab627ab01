//! Chat-completion backend (OpenAI API shape).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use lexicard_core::prompt::SYSTEM_PROMPT;

use super::{error_from_response, non_empty, Completion, CompletionService, ProviderError};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Chat-completion provider.
pub struct OpenAiProvider {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl OpenAiProvider {
    pub fn new(client: Client, base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/v1/chat/completions", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl CompletionService for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn generate_completion(&self, prompt: &str) -> Result<Completion, ProviderError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(ProviderError::Network)?;

        if !resp.status().is_success() {
            let error = error_from_response(resp).await;
            tracing::error!("OpenAI API error: {}", error);
            return Err(error);
        }

        let response: ChatResponse = resp.json().await.map_err(ProviderError::Decode)?;
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content);

        non_empty(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn provider(base_url: &str) -> OpenAiProvider {
        OpenAiProvider::new(Client::new(), base_url, "sk-test", "gpt-4")
    }

    #[tokio::test]
    async fn test_returns_first_choice() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                assert_eq!(headers["authorization"], "Bearer sk-test");
                assert_eq!(body["model"], "gpt-4");
                assert_eq!(body["messages"][0]["role"], "system");
                assert_eq!(body["messages"][1]["content"], "hello");
                Json(json!({
                    "choices": [{
                        "message": { "role": "assistant", "content": "line one\nline two" }
                    }]
                }))
            }),
        );
        let base = serve(router).await;

        let completion = provider(&base).generate_completion("hello").await.unwrap();
        assert_eq!(completion.content, "line one\nline two");
    }

    #[tokio::test]
    async fn test_missing_content_is_error() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { Json(json!({ "choices": [{ "message": { "content": null } }] })) }),
        );
        let base = serve(router).await;

        let result = provider(&base).generate_completion("hello").await;
        assert!(matches!(result, Err(ProviderError::EmptyContent)));
    }

    #[tokio::test]
    async fn test_no_choices_is_error() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { Json(json!({ "choices": [] })) }),
        );
        let base = serve(router).await;

        let result = provider(&base).generate_completion("hello").await;
        assert!(matches!(result, Err(ProviderError::EmptyContent)));
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_authentication() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { (StatusCode::UNAUTHORIZED, "invalid key") }),
        );
        let base = serve(router).await;

        let result = provider(&base).generate_completion("hello").await;
        match result {
            Err(ProviderError::Authentication { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid key");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_maps_to_service() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "overloaded") }),
        );
        let base = serve(router).await;

        let result = provider(&base).generate_completion("hello").await;
        assert!(matches!(result, Err(ProviderError::Service { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_unreachable_is_network_error() {
        let result = provider("http://127.0.0.1:1").generate_completion("hello").await;
        assert!(matches!(result, Err(ProviderError::Network(_))));
    }
}

//! Text-completion backends behind a single trait.

pub mod anthropic;
pub mod openai;
pub mod retry;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use thiserror::Error;

use crate::config::{ProviderConfig, ProviderKind};

pub use anthropic::AnthropicProvider;
pub use openai::OpenAiProvider;
pub use retry::RetryPolicy;

/// Text returned by a completion backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub content: String,
}

/// Failures of a completion backend. The underlying cause is kept as source.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider API key is not configured")]
    MissingApiKey,

    #[error("network error talking to provider")]
    Network(#[source] reqwest::Error),

    #[error("authentication failed ({status}): {message}")]
    Authentication { status: u16, message: String },

    #[error("provider returned {status}: {message}")]
    Service { status: u16, message: String },

    #[error("could not decode provider response")]
    Decode(#[source] reqwest::Error),

    #[error("provider returned no content")]
    EmptyContent,
}

/// A backend that turns a prompt into completion text.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Backend identifier for logs.
    fn name(&self) -> &'static str;

    async fn generate_completion(&self, prompt: &str) -> Result<Completion, ProviderError>;
}

/// Construct the backend chosen in configuration.
pub fn build_provider(
    config: &ProviderConfig,
) -> Result<Arc<dyn CompletionService>, ProviderError> {
    if config.api_key.trim().is_empty() {
        return Err(ProviderError::MissingApiKey);
    }

    let client = Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(ProviderError::Network)?;

    let provider: Arc<dyn CompletionService> = match config.kind {
        ProviderKind::OpenAi => Arc::new(OpenAiProvider::new(
            client,
            &config.base_url,
            &config.api_key,
            &config.model,
        )),
        ProviderKind::Anthropic => Arc::new(AnthropicProvider::new(
            client,
            &config.base_url,
            &config.api_key,
            &config.model,
        )),
    };

    tracing::info!("Using {} provider with model {}", provider.name(), config.model);
    Ok(provider)
}

/// Map a non-success HTTP response to a provider error.
async fn error_from_response(resp: Response) -> ProviderError {
    let status = resp.status();
    let message = resp.text().await.unwrap_or_default();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::Authentication {
            status: status.as_u16(),
            message,
        },
        _ => ProviderError::Service {
            status: status.as_u16(),
            message,
        },
    }
}

/// Reject an absent or empty content field instead of treating it as success.
///
/// Whitespace-only text is passed through; judging it is up to the caller.
fn non_empty(content: Option<String>) -> Result<Completion, ProviderError> {
    match content {
        Some(content) if !content.is_empty() => Ok(Completion { content }),
        _ => Err(ProviderError::EmptyContent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config(kind: ProviderKind, key: &str) -> ProviderConfig {
        ProviderConfig {
            kind,
            api_key: key.to_string(),
            model: "test-model".to_string(),
            base_url: "http://localhost:1".to_string(),
            timeout: Duration::from_secs(1),
        }
    }

    #[test]
    fn test_build_selects_backend() {
        let openai = build_provider(&config(ProviderKind::OpenAi, "k")).unwrap();
        assert_eq!(openai.name(), "openai");

        let anthropic = build_provider(&config(ProviderKind::Anthropic, "k")).unwrap();
        assert_eq!(anthropic.name(), "anthropic");
    }

    #[test]
    fn test_build_requires_key() {
        let result = build_provider(&config(ProviderKind::OpenAi, "  "));
        assert!(matches!(result, Err(ProviderError::MissingApiKey)));
    }

    #[test]
    fn test_non_empty_rejects_missing_content() {
        assert!(matches!(non_empty(None), Err(ProviderError::EmptyContent)));
        assert!(matches!(
            non_empty(Some(String::new())),
            Err(ProviderError::EmptyContent)
        ));
        assert_eq!(non_empty(Some(" \n ".to_string())).unwrap().content, " \n ");
        assert_eq!(
            non_empty(Some("text".to_string())).unwrap().content,
            "text"
        );
    }

    #[test]
    fn test_error_display() {
        let error = ProviderError::Authentication {
            status: 401,
            message: "bad key".to_string(),
        };
        assert_eq!(error.to_string(), "authentication failed (401): bad key");
    }

    #[test]
    fn test_transport_cause_reported_once() {
        let cause = Client::new().get("not a url").build().unwrap_err();
        let cause_text = cause.to_string();
        let error = ProviderError::Network(cause);

        assert_eq!(error.to_string(), "network error talking to provider");
        let source = std::error::Error::source(&error).unwrap();
        assert_eq!(source.to_string(), cause_text);
    }
}

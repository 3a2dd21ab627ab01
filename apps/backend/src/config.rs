//! Process configuration read once at startup.

use std::time::Duration;

use thiserror::Error;

use crate::providers::retry::RetryPolicy;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-2";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),

    #[error("unsupported AI provider: {0} (expected \"openai\" or \"anthropic\")")]
    UnsupportedProvider(String),

    #[error("invalid number for {var}: {value}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Which completion backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Chat-completion style backend.
    OpenAi,
    /// Legacy single-prompt completion backend.
    Anthropic,
}

impl ProviderKind {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "anthropic" => Ok(Self::Anthropic),
            other => Err(ConfigError::UnsupportedProvider(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
        }
    }
}

/// Settings for the selected completion backend.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

/// Full server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub provider: ProviderConfig,
    pub retry: RetryPolicy,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Env vars:
    /// - AI_PROVIDER: "openai" or "anthropic" (required)
    /// - OPENAI_API_KEY / ANTHROPIC_API_KEY: key for the selected provider
    /// - OPENAI_MODEL / ANTHROPIC_MODEL, OPENAI_BASE_URL / ANTHROPIC_BASE_URL
    /// - GENERATION_MAX_RETRIES (default 3), GENERATION_RETRY_DELAY_MS (default 1000)
    /// - PROVIDER_TIMEOUT_SECS (default 60)
    /// - HOST (default 0.0.0.0), PORT (default 3000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let kind = var("AI_PROVIDER")
            .ok_or(ConfigError::MissingVar("AI_PROVIDER"))
            .and_then(|v| ProviderKind::parse(&v))?;

        let (key_var, model_var, url_var, default_model, default_url) = match kind {
            ProviderKind::OpenAi => (
                "OPENAI_API_KEY",
                "OPENAI_MODEL",
                "OPENAI_BASE_URL",
                DEFAULT_OPENAI_MODEL,
                DEFAULT_OPENAI_BASE_URL,
            ),
            ProviderKind::Anthropic => (
                "ANTHROPIC_API_KEY",
                "ANTHROPIC_MODEL",
                "ANTHROPIC_BASE_URL",
                DEFAULT_ANTHROPIC_MODEL,
                DEFAULT_ANTHROPIC_BASE_URL,
            ),
        };

        let api_key = var(key_var).ok_or(ConfigError::MissingVar(key_var))?;

        let provider = ProviderConfig {
            kind,
            api_key,
            model: var(model_var).unwrap_or_else(|| default_model.to_string()),
            base_url: var(url_var)
                .unwrap_or_else(|| default_url.to_string())
                .trim_end_matches('/')
                .to_string(),
            timeout: Duration::from_secs(parse_number(&var, "PROVIDER_TIMEOUT_SECS", 60)?),
        };

        let retry = RetryPolicy::new(
            parse_number(&var, "GENERATION_MAX_RETRIES", 3)?,
            Duration::from_millis(parse_number(&var, "GENERATION_RETRY_DELAY_MS", 1000)?),
        );

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_number(&var, "PORT", 3000)?,
            provider,
            retry,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_number<T, F>(var: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
            var: name,
            value,
        }),
        None => Ok(default),
    }
}

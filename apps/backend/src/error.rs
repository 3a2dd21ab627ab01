//! Error handling for the backend API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lexicard_core::{CollectionError, SessionError};
use serde::Serialize;
use thiserror::Error;

use crate::services::GenerationError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{message}")]
    Generation {
        message: String,
        details: Option<String>,
    },

    #[error("{0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Generation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let details = match &self {
            ApiError::Generation { details, .. } => details.clone(),
            _ => None,
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

impl From<GenerationError> for ApiError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::InvalidInput(message) => ApiError::BadRequest(message),
            GenerationError::Provider(ref source) => {
                tracing::error!(error = ?source, "Generation failed at provider");
                ApiError::Generation {
                    message: err.to_string(),
                    details: std::error::Error::source(source).map(|cause| cause.to_string()),
                }
            }
            other => {
                tracing::error!("Generation failed: {}", other);
                ApiError::Generation {
                    message: other.to_string(),
                    details: other.raw_completion().map(str::to_string),
                }
            }
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NoStarredCards => ApiError::Conflict(
                "No cards have been starred. Please star some cards before reviewing tough terms."
                    .to_string(),
            ),
            SessionError::EmptySource => ApiError::Conflict(err.to_string()),
        }
    }
}

impl From<CollectionError> for ApiError {
    fn from(err: CollectionError) -> Self {
        match err {
            CollectionError::NotFound(_) => ApiError::NotFound(err.to_string()),
            CollectionError::InvalidCard { .. } => ApiError::BadRequest(err.to_string()),
            CollectionError::DuplicateId(_) => ApiError::Conflict(err.to_string()),
        }
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ProviderError;
    use lexicard_core::CardId;

    #[test]
    fn test_bad_request_status() {
        let error = ApiError::BadRequest("invalid input".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_status() {
        let error = ApiError::from(CollectionError::NotFound(CardId::new()));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_card_is_bad_request() {
        let error = ApiError::from(CollectionError::InvalidCard {
            id: CardId::new(),
            field: "lexicalItem",
        });
        assert!(error.to_string().ends_with("has an empty lexicalItem"));
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_status() {
        let error = ApiError::from(SessionError::NoStarredCards);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_invalid_input_is_bad_request() {
        let error = ApiError::from(GenerationError::InvalidInput("Missing text".to_string()));
        assert_eq!(error.to_string(), "Missing text");
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_provider_error_is_internal() {
        let error = ApiError::from(GenerationError::Provider(ProviderError::Service {
            status: 500,
            message: "boom".to_string(),
        }));
        assert_eq!(error.to_string(), "AI provider error: provider returned 500: boom");
        assert_eq!(error.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_incomplete_generation_keeps_raw_details() {
        let error = ApiError::from(GenerationError::IncompleteGeneration {
            expected: 5,
            line_count: 1,
            raw: "one line".to_string(),
        });
        match &error {
            ApiError::Generation { details, .. } => {
                assert_eq!(details.as_deref(), Some("one line"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(error.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_display_internal() {
        let error = ApiError::Internal("connection lost".to_string());
        assert_eq!(error.to_string(), "connection lost");
    }
}

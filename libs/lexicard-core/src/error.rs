//! Error types for lexicard-core.

use thiserror::Error;

use crate::types::CardId;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors raised while turning a completion into card fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("completion was empty")]
    EmptyCompletion,

    #[error("incomplete generation: expected 5 lines, got {line_count}")]
    IncompleteGeneration { line_count: usize, raw: String },
}

/// Errors from the study session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no saved cards to study")]
    EmptySource,

    #[error("no cards have been starred")]
    NoStarredCards,
}

/// Errors from the saved-card collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("card {0} already exists")]
    DuplicateId(CardId),

    #[error("card {0} not found")]
    NotFound(CardId),

    #[error("card {id} has an empty {field}")]
    InvalidCard { id: CardId, field: &'static str },
}

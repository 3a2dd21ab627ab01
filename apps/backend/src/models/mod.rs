//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from lexicard-core
pub use lexicard_core::{Card, CardId, CardUpdate, Direction, ReviewMode, SessionView};

// === Generation ===

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateFlashcardRequest {
    #[serde(default)]
    pub target_word: Option<String>,
    #[serde(default)]
    pub initial_sentence: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimplifyTextRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifyTextResponse {
    pub simplified_text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateStoryRequest {
    #[serde(default)]
    pub phrases: Option<Vec<String>>,
}

// === Saved cards ===

#[derive(Debug, Clone, Serialize)]
pub struct CardListResponse {
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardListQuery {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub starred: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StarResponse {
    pub id: CardId,
    pub is_starred: bool,
}

// === Study session ===

#[derive(Debug, Clone, Deserialize)]
pub struct NavigateRequest {
    pub direction: Direction,
}

/// Session state, or `{"active": false}` when no session is open.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SessionResponse {
    Active(SessionView),
    Inactive { active: bool },
}

impl From<Option<SessionView>> for SessionResponse {
    fn from(view: Option<SessionView>) -> Self {
        match view {
            Some(view) => Self::Active(view),
            None => Self::Inactive { active: false },
        }
    }
}

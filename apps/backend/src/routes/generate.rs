//! Completion-backed endpoints

use axum::{extract::State, Json};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::Story;
use crate::AppState;

/// POST /api/generateFlashcard
///
/// Returns the generated card without saving it.
pub async fn flashcard(
    State(state): State<AppState>,
    Json(payload): Json<GenerateFlashcardRequest>,
) -> Result<Json<Card>> {
    let (Some(word), Some(sentence)) = (payload.target_word, payload.initial_sentence) else {
        return Err(ApiError::BadRequest(
            "Missing targetWord or initialSentence".to_string(),
        ));
    };

    let card = state.generator.generate(&word, &sentence).await?;
    Ok(Json(card))
}

/// POST /api/simplifyText
pub async fn simplify(
    State(state): State<AppState>,
    Json(payload): Json<SimplifyTextRequest>,
) -> Result<Json<SimplifyTextResponse>> {
    let text = payload
        .text
        .ok_or_else(|| ApiError::BadRequest("Missing text".to_string()))?;

    let simplified_text = state.simplifier.simplify(&text).await?;
    Ok(Json(SimplifyTextResponse { simplified_text }))
}

/// POST /api/generateStory
pub async fn story(
    State(state): State<AppState>,
    Json(payload): Json<GenerateStoryRequest>,
) -> Result<Json<Story>> {
    let phrases = payload
        .phrases
        .ok_or_else(|| ApiError::BadRequest("Invalid input".to_string()))?;

    let story = state.story.write(&phrases).await?;
    Ok(Json(story))
}

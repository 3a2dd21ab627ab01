//! Saved card endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/cards
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CardListQuery>,
) -> Result<Json<CardListResponse>> {
    let library = state.library.lock().await;
    let cards: Vec<Card> = match query.word.as_deref() {
        Some(word) => library.cards().find_by_word(word).cloned().collect(),
        None => library.cards().iter().cloned().collect(),
    };
    let cards = cards
        .into_iter()
        .filter(|c| query.starred.map_or(true, |s| c.is_starred == s))
        .collect();
    Ok(Json(CardListResponse { cards }))
}

/// POST /api/cards
pub async fn save(
    State(state): State<AppState>,
    Json(card): Json<Card>,
) -> Result<(StatusCode, Json<Card>)> {
    let saved = state.library.lock().await.save(card)?;
    tracing::info!(card_id = %saved.id, "Saved flashcard for '{}'", saved.word);
    Ok((StatusCode::CREATED, Json(saved)))
}

/// PUT /api/cards/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<CardId>,
    Json(update): Json<CardUpdate>,
) -> Result<Json<Card>> {
    let updated = state.library.lock().await.update(&id, update)?;
    Ok(Json(updated))
}

/// DELETE /api/cards/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<CardId>) -> Result<StatusCode> {
    state.library.lock().await.delete(&id)?;
    tracing::info!(card_id = %id, "Deleted flashcard");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/cards/:id/star
pub async fn star(
    State(state): State<AppState>,
    Path(id): Path<CardId>,
) -> Result<Json<StarResponse>> {
    let is_starred = state.library.lock().await.star(&id)?;
    Ok(Json(StarResponse { id, is_starred }))
}

//! Study session endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/session
pub async fn current(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(state.library.lock().await.view().into())
}

/// POST /api/session/start
pub async fn start(State(state): State<AppState>) -> Result<Json<SessionView>> {
    let view = state.library.lock().await.start()?;
    tracing::info!("Study session started with {} cards", view.total);
    Ok(Json(view))
}

/// POST /api/session/restart
pub async fn restart(State(state): State<AppState>) -> Result<Json<SessionView>> {
    let view = state.library.lock().await.restart()?;
    Ok(Json(view))
}

/// POST /api/session/review-starred
pub async fn review_starred(State(state): State<AppState>) -> Result<Json<SessionView>> {
    let view = state.library.lock().await.review_starred()?;
    tracing::info!("Reviewing {} starred cards", view.total);
    Ok(Json(view))
}

/// POST /api/session/next
pub async fn next(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(state.library.lock().await.next().into())
}

/// POST /api/session/previous
pub async fn previous(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(state.library.lock().await.previous().into())
}

/// POST /api/session/flip
pub async fn flip(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(state.library.lock().await.flip().into())
}

/// POST /api/session/navigate
pub async fn navigate(
    State(state): State<AppState>,
    Json(request): Json<NavigateRequest>,
) -> Json<SessionResponse> {
    Json(state.library.lock().await.navigate(request.direction).into())
}

/// POST /api/session/exit
pub async fn exit(State(state): State<AppState>) -> StatusCode {
    state.library.lock().await.exit();
    StatusCode::NO_CONTENT
}

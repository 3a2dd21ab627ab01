pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::providers::{build_provider, CompletionService, RetryPolicy};
use crate::services::{CardGenerator, StoryWriter, StudyLibrary, TextSimplifier};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<CardGenerator>,
    pub simplifier: Arc<TextSimplifier>,
    pub story: Arc<StoryWriter>,
    pub library: Arc<Mutex<StudyLibrary>>,
}

impl AppState {
    /// Wire every service to one completion backend.
    pub fn new(provider: Arc<dyn CompletionService>, retry: RetryPolicy) -> Self {
        Self {
            generator: Arc::new(CardGenerator::new(provider.clone(), retry)),
            simplifier: Arc::new(TextSimplifier::new(provider.clone(), retry)),
            story: Arc::new(StoryWriter::new(provider, retry)),
            library: Arc::new(Mutex::new(StudyLibrary::new())),
        }
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Generation routes
        .route("/api/generateFlashcard", post(routes::generate::flashcard))
        .route("/api/simplifyText", post(routes::generate::simplify))
        .route("/api/generateStory", post(routes::generate::story))
        // Saved card routes
        .route("/api/cards", get(routes::cards::list).post(routes::cards::save))
        .route(
            "/api/cards/:id",
            put(routes::cards::update).delete(routes::cards::delete),
        )
        .route("/api/cards/:id/star", post(routes::cards::star))
        // Study session routes
        .route("/api/session", get(routes::session::current))
        .route("/api/session/start", post(routes::session::start))
        .route("/api/session/restart", post(routes::session::restart))
        .route("/api/session/review-starred", post(routes::session::review_starred))
        .route("/api/session/next", post(routes::session::next))
        .route("/api/session/previous", post(routes::session::previous))
        .route("/api/session/flip", post(routes::session::flip))
        .route("/api/session/navigate", post(routes::session::navigate))
        .route("/api/session/exit", post(routes::session::exit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Provider selection happens once; a bad setting stops startup.
    let config = Config::from_env()?;

    tracing::info!("Initializing {} provider...", config.provider.kind.as_str());
    let provider = build_provider(&config.provider)?;

    let state = AppState::new(provider, config.retry);
    let app = router(state);

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

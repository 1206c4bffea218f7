//! HTTP API for the hangman server.
//!
//! # Architecture
//!
//! The API is built with:
//! - **Axum**: Async web framework for routing and JSON extraction
//! - **Tower**: Middleware for CORS
//! - **Session cookie**: A `hangman_session` UUID cookie identifies the
//!   browser; game state lives server-side in [`SessionStore`]
//!
//! # Modules
//!
//! - [`games`]: Game play (start, guess, fetch state)
//! - [`session`]: Session cookie middleware and the [`session::SessionId`]
//!   extractor
//!
//! # Endpoints Overview
//!
//! ```text
//! GET  /            - Game page (embedded HTML)
//! GET  /health      - Server health status
//! POST /new_game    - Start (or restart) the session's game
//! POST /guess       - Submit a letter guess
//! GET  /game_state  - Fetch the session's current game
//! ```
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use hm_server::api::{AppState, create_router};
//! use hm_server::store::SessionStore;
//! use std::sync::Arc;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let words: Vec<String> = hangman::constants::WORDS
//!     .iter()
//!     .map(|w| w.to_string())
//!     .collect();
//!
//! let state = AppState {
//!     store: Arc::new(SessionStore::new(10_000)),
//!     words: Arc::new(words),
//! };
//!
//! let app = create_router(state);
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:7777").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod games;
pub mod session;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::store::SessionStore;

/// Application state shared across all HTTP handlers.
///
/// Cloned per request (cheap due to Arc wrappers).
#[derive(Clone)]
pub struct AppState {
    /// Per-session game store
    pub store: Arc<SessionStore>,
    /// Word list games are started from
    pub words: Arc<Vec<String>>,
}

/// Create the complete API router with all endpoints and middleware.
///
/// # Arguments
///
/// - `state`: Application state with the session store and word list
///
/// # Returns
///
/// Configured Axum router ready to serve requests
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/new_game", post(games::new_game))
        .route("/guess", post(games::guess))
        .route("/game_state", get(games::game_state))
        .layer(axum::middleware::from_fn(session::session_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// The game page, embedded at compile time so the binary is self-contained.
async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// Health check endpoint for monitoring.
///
/// # Example
///
/// ```bash
/// curl http://localhost:7777/health
/// # {"status":"healthy","version":"0.1.0","sessions":3,"timestamp":"2025-..."}
/// ```
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let sessions = state.store.session_count().await;

    let response = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "sessions": sessions,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(response))
}

//! Route configuration for story analysis endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{analyze_story, health, StoryAppState};

/// Creates the story router with all endpoints.
///
/// Routes:
/// - `POST /api/analyze` - Archetypal analysis of a story
/// - `POST /api/analyze?format=markdown` - Same analysis rendered as markdown
/// - `GET /health` - Liveness and configured model
pub fn story_router(state: StoryAppState) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_story))
        .route("/health", get(health))
        .with_state(state)
}

pub mod chat;
pub mod feeds;
pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(health::health))
        // Chat (core: conversational feed resolution)
        .route("/v1/chat", post(chat::chat))
        // Catalog introspection
        .route("/v1/feeds", get(feeds::list_feeds))
        .route("/v1/feeds/search", get(feeds::search_feeds))
}

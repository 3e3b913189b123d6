//! Feed catalog introspection endpoints.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Deserialize;

use nf_catalog::{CatalogRepo, Filter};

use crate::state::AppState;

/// `GET /v1/feeds`: list every catalog feed.
pub async fn list_feeds(State(state): State<AppState>) -> impl IntoResponse {
    match state.catalog.list_feeds(&Filter::All).await {
        Ok(feeds) => Json(serde_json::json!({ "feeds": feeds })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "feed listing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub term: String,
}

/// `GET /v1/feeds/search?term=...`: the matcher, exposed directly.
///
/// Mirrors what the engine does for a `SEARCH_REQUEST` intent; useful for
/// admin tooling and for debugging why the model saw the results it did.
pub async fn search_feeds(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    if query.term.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "'term' must be non-empty" })),
        )
            .into_response();
    }

    let matches = state.matcher.search(&query.term).await;
    Json(serde_json::json!({ "term": query.term, "feeds": matches })).into_response()
}

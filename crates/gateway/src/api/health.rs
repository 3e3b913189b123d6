//! Health endpoint.

use axum::extract::State;
use axum::response::Json;

use crate::state::AppState;

/// `GET /healthz`: liveness plus catalog record counts.
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let (feeds, websites) = state.catalog.counts();
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "catalog": { "feeds": feeds, "websites": websites },
    }))
}

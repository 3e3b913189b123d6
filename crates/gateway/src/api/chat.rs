//! Chat API endpoint, the inbound surface of the feed-resolution engine.
//!
//! `POST /v1/chat` takes a user message plus the prior transcript and
//! returns `{response, feed}` where `feed` is the resolved feed identity or
//! null.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Deserialize;

use nf_domain::chat::ChatMessage;
use nf_domain::error::Error;

use crate::state::AppState;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Request shape
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Both fields are required; either one missing is a validation error
/// rejected before any provider call. They are optional here only so the
/// rejection is ours (HTTP 400 with a message) rather than a serde 422.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatApiRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub chat_history: Option<Vec<ChatMessage>>,
}

fn validate(body: ChatApiRequest) -> Result<(String, Vec<ChatMessage>), Error> {
    let message = body
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| Error::InvalidRequest("'message' is required".into()))?;
    let history = body
        .chat_history
        .ok_or_else(|| Error::InvalidRequest("'chatHistory' is required".into()))?;
    Ok((message, history))
}

/// Map engine errors onto HTTP status codes.
///
/// Upstream/model failures are gateway errors (502); anything else
/// unexpected is a 500.
fn status_for(e: &Error) -> StatusCode {
    match e {
        Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        Error::Provider { .. }
        | Error::ChatProcessing { .. }
        | Error::ProtocolParse(_)
        | Error::SearchLimit(_)
        | Error::Timeout(_)
        | Error::Http(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// POST /v1/chat
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatApiRequest>,
) -> impl IntoResponse {
    let (message, history) = match validate(body) {
        Ok(v) => v,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response();
        }
    };

    match state.engine.handle(&message, &history).await {
        Ok(resolution) => Json(serde_json::json!({
            "response": resolution.reply,
            "feed": resolution.feed_id,
        }))
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "chat turn failed");
            (
                status_for(&e),
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_message_is_invalid() {
        let body = ChatApiRequest {
            message: None,
            chat_history: Some(vec![]),
        };
        assert!(matches!(validate(body), Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn blank_message_is_invalid() {
        let body = ChatApiRequest {
            message: Some("   ".into()),
            chat_history: Some(vec![]),
        };
        assert!(matches!(validate(body), Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn missing_history_is_invalid() {
        let body = ChatApiRequest {
            message: Some("hi".into()),
            chat_history: None,
        };
        assert!(matches!(validate(body), Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn empty_history_is_fine() {
        let body = ChatApiRequest {
            message: Some("hi".into()),
            chat_history: Some(vec![]),
        };
        let (message, history) = validate(body).unwrap();
        assert_eq!(message, "hi");
        assert!(history.is_empty());
    }

    #[test]
    fn upstream_failures_map_to_502() {
        let err = Error::chat_processing(Error::Provider {
            provider: "openai-compat".into(),
            message: "boom".into(),
        });
        assert_eq!(status_for(&err), StatusCode::BAD_GATEWAY);
        assert_eq!(
            status_for(&Error::ProtocolParse("bad payload".into())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(&Error::Other("?".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

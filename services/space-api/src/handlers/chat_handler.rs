use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::Json;
use tracing::warn;

use crate::domain::{ChatReply, ChatRequest};
use crate::services::ChatService;
use crate::state::AppState;

/// Largest chat body that is read; anything bigger counts as an empty message
pub const MAX_CHAT_BODY_BYTES: usize = 64 * 1024;

/// Space assistant chat. Never fails: unreadable bodies count as an empty message.
pub async fn chat_response(State(state): State<AppState>, body: Body) -> Json<ChatReply> {
    let request = match to_bytes(body, MAX_CHAT_BODY_BYTES).await {
        Ok(bytes) if bytes.is_empty() => ChatRequest::default(),
        Ok(bytes) => serde_json::from_slice::<ChatRequest>(&bytes).unwrap_or_else(|e| {
            warn!("Unreadable chat request body: {}", e);
            ChatRequest::default()
        }),
        Err(e) => {
            warn!("Chat request body rejected: {}", e);
            ChatRequest::default()
        }
    };

    Json(ChatService::respond(&state.inference, &state.config, &request.message).await)
}

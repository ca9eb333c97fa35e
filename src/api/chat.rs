//! Guide chat endpoint.

use axum::{extract::State, Json};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{ChatMessage, ChatRequest, ChatRole};
use crate::AppState;

/// Reply used whenever the model cannot be reached.
pub const CHAT_FALLBACK: &str =
    "Ih, deu um ruim aqui no sistema! Tenta de novo em um minutinho, valeu?";

/// POST /api/chat - Ask the local guide.
pub async fn ask_guide(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> ApiResult<ChatMessage> {
    let revision_id = state.store.revision_id().await;

    if request.prompt.trim().is_empty() {
        return error(
            AppError::Validation("Prompt is required".to_string()),
            revision_id,
        );
    }

    let text = match state.display.translator().advise(&request.prompt).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Guide chat failed: {}", e);
            CHAT_FALLBACK.to_string()
        }
    };

    success(
        ChatMessage {
            role: ChatRole::Model,
            text,
        },
        revision_id,
    )
}

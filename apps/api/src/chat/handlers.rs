use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ChatMessage, ReplySource};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub id: Uuid,
    pub reply: String,
    pub source: ReplySource,
}

/// POST /api/v1/chat
///
/// Empty/whitespace messages are rejected here, before either responder runs.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if req.message.trim().is_empty() {
        return Err(AppError::Validation("message must not be empty".to_string()));
    }

    let (reply, source) = super::respond(&state, &req.history, &req.message).await;

    Ok(Json(ChatResponse {
        id: Uuid::new_v4(),
        reply,
        source,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::gemini::{Content, LlmError};
    use crate::chat::{testing, ChatBackend};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingBackend {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ChatBackend for CountingBackend {
        async fn generate(&self, _contents: &[Content]) -> Result<Content, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Content::model_text("unreached"))
        }
    }

    #[tokio::test]
    async fn test_whitespace_message_rejected_before_responders() {
        let backend = Arc::new(CountingBackend {
            calls: AtomicUsize::new(0),
        });
        let state = testing::app_state(Some(backend.clone() as Arc<dyn ChatBackend>));

        let result = handle_chat(
            State(state),
            Json(ChatRequest {
                history: vec![],
                message: "   \n\t".to_string(),
            }),
        )
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        // the hosted backend was never consulted
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }
}

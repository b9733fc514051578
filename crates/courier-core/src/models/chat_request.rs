use serde::Deserialize;

use crate::models::turn::Turn;

/// The decoded API Gateway request body for the chat endpoint.
///
/// `message` is required; a body without it fails deserialization and
/// surfaces as a request parse failure. `conversationHistory` is optional
/// and defaults to an empty history.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Vec<Turn>,
}

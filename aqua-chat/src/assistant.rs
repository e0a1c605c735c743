use crate::error::AssistantError;
use crate::message::ChatMessage;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Everything the remote assistant needs for one turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Transcript before the new user message.
    pub history: Vec<ChatMessage>,
    pub user_text: String,
    pub system_instruction: String,
    pub temperature: f32,
}

/// The remote language model, as seen by the chat session.
///
/// Futures are not required to be `Send`: in the browser the call runs on
/// the single-threaded WASM executor.
#[async_trait(?Send)]
pub trait Assistant {
    async fn generate(&self, request: &ChatRequest) -> Result<String, AssistantError>;
}

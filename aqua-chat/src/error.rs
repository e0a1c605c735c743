/// Error types for assistant calls
use thiserror::Error;

/// Any failure of the remote assistant. The chat session absorbs all of
/// these into a fallback reply.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssistantError {
    /// No API key was configured
    #[error("No API key configured for the assistant")]
    MissingApiKey,

    /// Network or fetch failure
    #[error("Assistant request failed: {0}")]
    Transport(String),

    /// Provider answered with a non-success status
    #[error("Assistant provider error {status}: {message}")]
    Provider { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("Failed to decode assistant response: {0}")]
    Decode(String),

    /// Provider succeeded but returned no text
    #[error("Assistant returned an empty response")]
    EmptyResponse,
}

impl From<serde_json::Error> for AssistantError {
    fn from(e: serde_json::Error) -> Self {
        AssistantError::Decode(e.to_string())
    }
}

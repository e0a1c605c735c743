use crate::assistant::{Assistant, ChatRequest};
use crate::config::Persona;
use crate::error::AssistantError;
use crate::message::ChatMessage;
use serde::{Deserialize, Serialize};

/// Reply used when the assistant call fails for any reason.
pub const FALLBACK_TEXT: &str = "Something went wrong. Please check your connection and try again.";

/// Reply used when the assistant answers without any text.
pub const NO_REPLY_TEXT: &str = "I'm sorry, I'm having trouble connecting right now.";

/// Transcript plus the in-flight gate for the chat widget.
///
/// A turn is split in two so it can span an event loop: [`begin`] appends
/// the user message and hands back the request to run, [`settle`] appends the
/// reply. [`send`] does both around an awaited [`Assistant`] call.
///
/// [`begin`]: ChatSession::begin
/// [`settle`]: ChatSession::settle
/// [`send`]: ChatSession::send
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
    in_flight: bool,
    persona: Persona,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_persona(persona: Persona) -> Self {
        Self {
            persona,
            ..Self::default()
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Start a turn. Returns `None` without touching state when `text` is
    /// blank or a request is already outstanding.
    pub fn begin(&mut self, text: &str) -> Option<ChatRequest> {
        if text.trim().is_empty() {
            return None;
        }
        if self.in_flight {
            log::debug!("[Aqua] chat: send ignored, request already in flight");
            return None;
        }
        let request = ChatRequest {
            history: self.transcript.clone(),
            user_text: text.to_string(),
            system_instruction: self.persona.system_instruction.clone(),
            temperature: self.persona.temperature,
        };
        self.transcript.push(ChatMessage::user(text));
        self.in_flight = true;
        Some(request)
    }

    /// Finish the outstanding turn with the assistant's outcome.
    ///
    /// Errors become a fallback reply. Returns `None` if no turn was
    /// outstanding, in which case nothing is appended.
    pub fn settle(&mut self, outcome: Result<String, AssistantError>) -> Option<&ChatMessage> {
        if !self.in_flight {
            log::warn!("[Aqua] chat: reply arrived with no request in flight, dropping");
            return None;
        }
        let content = match outcome {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) | Err(AssistantError::EmptyResponse) => NO_REPLY_TEXT.to_string(),
            Err(e) => {
                log::error!("[Aqua] chat: assistant call failed: {}", e);
                FALLBACK_TEXT.to_string()
            }
        };
        self.transcript.push(ChatMessage::assistant(content));
        self.in_flight = false;
        self.transcript.last()
    }

    /// Run one full turn against `assistant`.
    pub async fn send<A>(&mut self, assistant: &A, text: &str) -> Option<ChatMessage>
    where
        A: Assistant + ?Sized,
    {
        let request = self.begin(text)?;
        let outcome = assistant.generate(&request).await;
        self.settle(outcome).cloned()
    }
}

//! Assistant persona and endpoint configuration.

use crate::error::AssistantError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

pub const SYSTEM_INSTRUCTION: &str = "You are AI Aqua, a helpful assistant specialized in water \
conservation and SDG 6 (Clean Water and Sanitation). Provide concise, encouraging, and accurate \
information about lakes, water quality, and sustainability. Keep responses relatively short.";

/// Greeting shown at the top of the chat widget. It is not part of the
/// transcript and is never sent to the model.
pub const GREETING: &str = "Systems initialized. I am AI Aqua. How can I assist with your \
environmental analysis or lake registry queries today?";

/// How the assistant is instructed on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    pub system_instruction: String,
    pub temperature: f32,
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Where and how to reach the Gemini `generateContent` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl AssistantConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Full `generateContent` URL for the configured model.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    /// The API key, or `MissingApiKey` when unset or blank.
    pub fn api_key(&self) -> Result<&str, AssistantError> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(AssistantError::MissingApiKey),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_url_uses_model() {
        let config = AssistantConfig {
            endpoint: "https://example.test/v1beta/".to_string(),
            ..AssistantConfig::default()
        };
        assert_eq!(
            config.generate_url(),
            "https://example.test/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn blank_api_key_is_missing() {
        assert_eq!(
            AssistantConfig::default().api_key(),
            Err(AssistantError::MissingApiKey)
        );
        assert_eq!(
            AssistantConfig::with_api_key("  ").api_key(),
            Err(AssistantError::MissingApiKey)
        );
        assert_eq!(AssistantConfig::with_api_key("k").api_key(), Ok("k"));
    }

    #[test]
    fn default_persona() {
        let persona = Persona::default();
        assert!((persona.temperature - 0.7).abs() < f32::EPSILON);
        assert!(persona.system_instruction.starts_with("You are AI Aqua"));
    }
}

//! Wire types for the Gemini `generateContent` endpoint.
//!
//! Shared by the native `reqwest` client and the browser fetch client so
//! both build identical request bodies and read replies the same way.

use crate::assistant::ChatRequest;
use crate::error::AssistantError;
use crate::message::{ChatMessage, ChatRole};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// `user` or `model`; absent on system instructions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }
}

impl From<&ChatMessage> for Content {
    fn from(message: &ChatMessage) -> Self {
        let role = match message.role {
            ChatRole::User => "user",
            ChatRole::Assistant => "model",
        };
        Content::text(Some(role), &message.content)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// History in order, followed by the new user turn.
    pub fn from_chat(request: &ChatRequest) -> Self {
        let mut contents: Vec<Content> = request.history.iter().map(Content::from).collect();
        contents.push(Content::text(Some("user"), &request.user_text));
        Self {
            contents,
            system_instruction: Content::text(None, &request.system_instruction),
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, if any.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Interpret an HTTP status and body from `generateContent`.
pub fn parse_response(status: u16, body: &str) -> Result<String, AssistantError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| body.chars().take(200).collect());
        return Err(AssistantError::Provider { status, message });
    }
    let response: GenerateContentResponse = serde_json::from_str(body)?;
    response.text().ok_or(AssistantError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> ChatRequest {
        ChatRequest {
            history: vec![
                ChatMessage::user("Which lakes are hazardous?"),
                ChatMessage::assistant("Powai, Bellandur and Hebbal."),
            ],
            user_text: "Why Bellandur?".to_string(),
            system_instruction: "Be brief.".to_string(),
            temperature: 0.7,
        }
    }

    #[test]
    fn request_body_layout() {
        let body = serde_json::to_value(GenerateContentRequest::from_chat(&request())).unwrap();
        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[1]["parts"][0]["text"], "Powai, Bellandur and Hebbal.");
        assert_eq!(contents[2]["role"], "user");
        assert_eq!(contents[2]["parts"][0]["text"], "Why Bellandur?");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "Be brief.");
        assert!(body["systemInstruction"].get("role").is_none());
        let temperature = body["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
    }

    #[test]
    fn reply_text_joins_parts() {
        let body = json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Foam " }, { "text": "and sewage." }] },
                "finishReason": "STOP"
            }]
        })
        .to_string();
        assert_eq!(parse_response(200, &body).unwrap(), "Foam and sewage.");
    }

    #[test]
    fn no_candidates_is_empty_response() {
        assert_eq!(
            parse_response(200, r#"{"candidates": []}"#),
            Err(AssistantError::EmptyResponse)
        );
        assert_eq!(parse_response(200, "{}"), Err(AssistantError::EmptyResponse));
    }

    #[test]
    fn provider_error_message_is_extracted() {
        let body = r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(
            parse_response(429, body),
            Err(AssistantError::Provider {
                status: 429,
                message: "Quota exceeded".to_string()
            })
        );
    }

    #[test]
    fn garbage_body_is_decode_error() {
        assert!(matches!(
            parse_response(200, "<html>oops</html>"),
            Err(AssistantError::Decode(_))
        ));
    }
}

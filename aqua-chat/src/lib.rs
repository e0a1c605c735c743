//! Chat session controller for the AI Aqua assistant.
//!
//! This crate provides:
//! - `message`: transcript entries (`ChatMessage`, `ChatRole`)
//! - `session`: `ChatSession`, the in-flight gated transcript controller
//! - `assistant`: the `Assistant` trait and `ChatRequest`
//! - `config`: persona (system instruction, temperature) and endpoint settings
//! - `gemini`: `generateContent` request/response wire types
//! - `client`: native `reqwest` Gemini client (feature `api`)
//!
//! The session never surfaces assistant failures to its caller; any error is
//! turned into a fixed fallback reply so every user turn gets exactly one
//! assistant turn.

pub mod assistant;
#[cfg(feature = "api")]
pub mod client;
pub mod config;
pub mod error;
pub mod gemini;
pub mod message;
pub mod session;

pub use assistant::{Assistant, ChatRequest};
pub use error::AssistantError;
pub use message::{ChatMessage, ChatRole};
pub use session::ChatSession;

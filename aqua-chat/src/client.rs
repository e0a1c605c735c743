//! Native Gemini client over `reqwest`.

use crate::assistant::{Assistant, ChatRequest};
use crate::config::AssistantConfig;
use crate::error::AssistantError;
use crate::gemini::{parse_response, GenerateContentRequest};
use async_trait::async_trait;
use reqwest::Client;

pub struct GeminiClient {
    client: Client,
    config: AssistantConfig,
}

impl GeminiClient {
    pub fn new(config: AssistantConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: AssistantConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl Assistant for GeminiClient {
    async fn generate(&self, request: &ChatRequest) -> Result<String, AssistantError> {
        let api_key = self.config.api_key()?;
        let body = GenerateContentRequest::from_chat(request);
        log::info!(
            "[Aqua] chat: calling {} with {} prior messages",
            self.config.model,
            request.history.len()
        );
        let response = self
            .client
            .post(self.config.generate_url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AssistantError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AssistantError::Transport(e.to_string()))?;
        parse_response(status, &text)
    }
}

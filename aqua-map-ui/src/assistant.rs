//! Gemini client for the browser, over `fetch`.
//!
//! Shares the request/response shapes with the native client in
//! `aqua_chat::client`; only the transport differs.

use aqua_chat::assistant::{Assistant, ChatRequest};
use aqua_chat::config::AssistantConfig;
use aqua_chat::error::AssistantError;
use aqua_chat::gemini::{parse_response, GenerateContentRequest};
use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

pub struct WebGeminiClient {
    config: AssistantConfig,
}

impl WebGeminiClient {
    pub fn new(config: AssistantConfig) -> Self {
        Self { config }
    }
}

fn transport(e: JsValue) -> AssistantError {
    AssistantError::Transport(format!("{:?}", e))
}

#[async_trait(?Send)]
impl Assistant for WebGeminiClient {
    async fn generate(&self, request: &ChatRequest) -> Result<String, AssistantError> {
        let api_key = self.config.api_key()?;
        let body = serde_json::to_string(&GenerateContentRequest::from_chat(request))?;

        let headers = Headers::new().map_err(transport)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(transport)?;
        headers.set("x-goog-api-key", api_key).map_err(transport)?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_mode(RequestMode::Cors);
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));

        let req = Request::new_with_str_and_init(&self.config.generate_url(), &init)
            .map_err(transport)?;
        let window = web_sys::window()
            .ok_or_else(|| AssistantError::Transport("no window".to_string()))?;

        log::info!(
            "[Aqua] chat: calling {} with {} prior messages",
            self.config.model,
            request.history.len()
        );
        let resp_value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(transport)?;
        let resp: Response = resp_value.dyn_into().map_err(transport)?;
        let status = resp.status();
        let text = JsFuture::from(resp.text().map_err(transport)?)
            .await
            .map_err(transport)?
            .as_string()
            .unwrap_or_default();
        parse_response(status, &text)
    }
}

//! DeepSeek API client implementation
//!
//! Implements the LlmClient trait over DeepSeek's OpenAI-compatible Chat
//! Completions API. One request per call, no retry - failures propagate
//! straight to the caller.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{CompletionRequest, CompletionResponse, LlmClient, LlmError, TokenUsage};
use crate::config::ResolvedOptions;

/// DeepSeek chat-completions client
pub struct DeepSeekClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
}

impl DeepSeekClient {
    /// Create a new client from resolved options
    pub fn from_options(options: &ResolvedOptions) -> Result<Self, LlmError> {
        debug!(model = %options.model, base_url = %options.base_url, "from_options: called");
        let http = Client::builder().build().map_err(LlmError::Network)?;

        Ok(Self {
            model: options.model.clone(),
            api_key: options.api_key.clone(),
            base_url: options.base_url.clone(),
            http,
        })
    }

    /// Build the request body for the chat completions endpoint
    fn build_request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        debug!(%self.model, temperature = %request.temperature, "build_request_body: called");

        let mut messages = vec![serde_json::json!({
            "role": "system",
            "content": request.system_prompt,
        })];

        messages.extend(request.messages.iter().map(|msg| {
            serde_json::json!({
                "role": msg.role.as_str(),
                "content": msg.content,
            })
        }));

        serde_json::json!({
            "model": self.model,
            "messages": messages,
            "temperature": request.temperature,
        })
    }

    /// Extract the first choice from the API response
    fn parse_response(&self, api_response: DeepSeekResponse) -> CompletionResponse {
        debug!(choice_count = api_response.choices.len(), "parse_response: called");
        let content = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);

        let usage = api_response
            .usage
            .map(|u| TokenUsage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        CompletionResponse { content, usage }
    }
}

#[async_trait]
impl LlmClient for DeepSeekClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        debug!(%self.model, "complete: called");
        let url = format!("{}/chat/completions", self.base_url);
        let body = self.build_request_body(&request);

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(LlmError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "complete: API error");
            return Err(LlmError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let api_response: DeepSeekResponse = response.json().await?;
        let completion = self.parse_response(api_response);
        debug!(
            input_tokens = completion.usage.input_tokens,
            output_tokens = completion.usage.output_tokens,
            "complete: success"
        );
        Ok(completion)
    }
}

// DeepSeek API response types (OpenAI-compatible shape)

#[derive(Debug, Deserialize)]
struct DeepSeekResponse {
    choices: Vec<DeepSeekChoice>,
    usage: Option<DeepSeekUsage>,
}

#[derive(Debug, Deserialize)]
struct DeepSeekChoice {
    message: DeepSeekMessage,
}

#[derive(Debug, Deserialize)]
struct DeepSeekMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeepSeekUsage {
    prompt_tokens: u64,
    completion_tokens: u64,
}

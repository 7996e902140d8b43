//! OpenAI-compatible provider implementation.
//!
//! Talks to any endpoint exposing the `/chat/completions` and `/embeddings`
//! routes of the OpenAI HTTP API (OpenAI itself, proxies, or local servers).

use super::types::*;
use crate::config::LlmConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// OpenAI-compatible HTTP API provider.
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    base_url: String,
    api_key: Option<String>,
    http_client: reqwest::Client,
}

impl OpenAiProvider {
    /// Creates a provider from the LLM config, reading the API key from the
    /// environment variable named by `api_key_env`.
    ///
    /// A missing key is not an error here: requests will fail and the answer
    /// pipeline degrades to its fallback response.
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        if api_key.is_none() {
            warn!(env = %config.api_key_env, "API key not set; LLM and embedding calls will fail");
        }
        Self::with_api_key(config, api_key)
    }

    pub fn with_api_key(config: &LlmConfig, api_key: Option<String>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            http_client,
        })
    }

    async fn post<B: Serialize + ?Sized>(&self, route: &str, body: &B) -> Result<reqwest::Response> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::Other("missing API key".to_string()))?;
        let url = format!("{}/{}", self.base_url, route);
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            return Err(ProviderError::Api(format!("{status}: {error_text}")));
        }

        Ok(response)
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        let body = OpenAiChatRequest {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature,
            stream: false,
        };

        let response = self.post("chat/completions", &body).await?;
        let parsed: OpenAiChatResponse = serde_json::from_slice(&response.bytes().await?)?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::Other("completion contained no message content".to_string()))?;

        debug!(model = %parsed.model, chars = content.len(), "Chat completion received");
        Ok(ChatResponse {
            model: parsed.model,
            content,
        })
    }

    async fn embed_batch(&self, inputs: &[&str], model: &str) -> Result<Vec<Vec<f32>>> {
        if inputs.is_empty() {
            return Ok(Vec::new());
        }

        let body = OpenAiEmbedRequest { model, input: inputs };
        let response = self.post("embeddings", &body).await?;
        let mut parsed: OpenAiEmbedResponse = serde_json::from_slice(&response.bytes().await?)?;

        parsed.data.sort_by_key(|entry| entry.index);
        Ok(parsed.data.into_iter().map(|entry| entry.embedding).collect())
    }
}

// OpenAI-specific request/response types (internal)

#[derive(Serialize)]
struct OpenAiChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f64,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct OpenAiChatResponse {
    #[serde(default)]
    model: String,
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiAssistantMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiAssistantMessage {
    content: Option<String>,
}

#[derive(Serialize)]
struct OpenAiEmbedRequest<'a> {
    model: &'a str,
    input: &'a [&'a str],
}

#[derive(Debug, Deserialize)]
struct OpenAiEmbedResponse {
    data: Vec<OpenAiEmbedding>,
}

#[derive(Debug, Deserialize)]
struct OpenAiEmbedding {
    embedding: Vec<f32>,
    index: usize,
}

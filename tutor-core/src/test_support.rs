//! Deterministic provider used by unit tests.

use crate::provider::{ChatRequest, ChatResponse, Provider, ProviderError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

const VOCABULARY: [&str; 8] = ["pandas", "data", "docker", "container", "git", "rebase", "csv", "week"];

/// Embeds text as keyword-presence vectors over a tiny vocabulary and
/// answers every chat with a fixed string. Either side can be made to fail.
#[derive(Default)]
pub struct FakeProvider {
    fail_chat: bool,
    fail_embed: bool,
    drop_last_embedding: bool,
    reject_empty_input: bool,
    chat_calls: AtomicUsize,
    embed_calls: AtomicUsize,
    last_chat: Mutex<Option<ChatRequest>>,
}

impl FakeProvider {
    pub const ANSWER: &'static str = "Pandas is a Python library for data analysis.";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_chat(mut self) -> Self {
        self.fail_chat = true;
        self
    }

    pub fn failing_embeddings(mut self) -> Self {
        self.fail_embed = true;
        self
    }

    pub fn dropping_last_embedding(mut self) -> Self {
        self.drop_last_embedding = true;
        self
    }

    /// Fails embedding requests containing an empty string, as the OpenAI
    /// embeddings endpoint does.
    pub fn rejecting_empty_input(mut self) -> Self {
        self.reject_empty_input = true;
        self
    }

    pub fn vector_for(text: &str) -> Vec<f32> {
        let text = text.to_lowercase();
        VOCABULARY
            .iter()
            .map(|word| if text.contains(word) { 1.0 } else { 0.0 })
            .collect()
    }

    pub fn chat_calls(&self) -> usize {
        self.chat_calls.load(Ordering::SeqCst)
    }

    pub fn embed_calls(&self) -> usize {
        self.embed_calls.load(Ordering::SeqCst)
    }

    pub fn last_chat_request(&self) -> Option<ChatRequest> {
        self.last_chat.lock().unwrap().clone()
    }
}

#[async_trait]
impl Provider for FakeProvider {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        self.chat_calls.fetch_add(1, Ordering::SeqCst);
        let model = request.model.clone();
        *self.last_chat.lock().unwrap() = Some(request);
        if self.fail_chat {
            return Err(ProviderError::Api("429 Too Many Requests: quota exceeded".to_string()));
        }
        Ok(ChatResponse {
            model,
            content: Self::ANSWER.to_string(),
        })
    }

    async fn embed_batch(&self, inputs: &[&str], _model: &str) -> Result<Vec<Vec<f32>>> {
        self.embed_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_embed {
            return Err(ProviderError::Other("embedding service unreachable".to_string()));
        }
        if self.reject_empty_input && inputs.iter().any(|text| text.is_empty()) {
            return Err(ProviderError::Api("400 Bad Request: input cannot be empty".to_string()));
        }
        let mut vectors: Vec<Vec<f32>> = inputs.iter().map(|text| Self::vector_for(text)).collect();
        if self.drop_last_embedding {
            vectors.pop();
        }
        Ok(vectors)
    }
}

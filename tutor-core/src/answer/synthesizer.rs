//! Answer generation from retrieved context.

use super::assembler::{LinkSet, ERROR_INFO_TEXT, ERROR_INFO_URL};
use super::prompt::{build_context, build_prompt, SYSTEM_MESSAGE};
use super::types::Link;
use crate::config::LlmConfig;
use crate::provider::{ChatRequest, Message, Provider};
use crate::rag::Retrieval;
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, error};

/// Answer returned when the AI service cannot produce one.
pub const FALLBACK_ANSWER: &str =
    "I am sorry, but I am currently unable to generate an answer. There was an issue with the AI service.";

/// Turns retrieved context into an answer via the chat model.
#[derive(Clone)]
pub struct Synthesizer {
    provider: Arc<dyn Provider>,
    model: String,
    temperature: f64,
}

impl Synthesizer {
    pub fn new(provider: Arc<dyn Provider>, config: &LlmConfig) -> Self {
        Self {
            provider,
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    pub fn request(&self, question: &str, retrieval: &Retrieval) -> ChatRequest {
        let context = build_context(retrieval);
        let prompt = build_prompt(question, &context);
        ChatRequest::new(&self.model, vec![Message::system(SYSTEM_MESSAGE), Message::user(prompt)])
            .with_temperature(self.temperature)
    }

    /// Generates the answer text.
    ///
    /// Failures of the chat call never reach the caller: the cause is logged,
    /// the error-info link is added to `links`, and the fallback answer is
    /// returned instead.
    pub async fn synthesize(&self, question: &str, retrieval: &Retrieval, links: &mut LinkSet) -> String {
        let request = self.request(question, retrieval);
        debug!(model = %request.model, "Requesting chat completion");

        match self.provider.chat(request).await {
            Ok(response) => response.content,
            Err(e) => fallback(links, &e),
        }
    }
}

/// Records an external service failure and returns the fallback answer.
pub(crate) fn fallback(links: &mut LinkSet, cause: &dyn Display) -> String {
    error!(error = %cause, "AI service call failed; returning fallback answer");
    links.insert(Link::new(ERROR_INFO_URL, ERROR_INFO_TEXT));
    FALLBACK_ANSWER.to_string()
}

//! Embedding generation using LLM providers.
//!
//! This module provides functionality to convert text into vector embeddings
//! using provider embedding models.

use crate::config::EmbeddingConfig;
use crate::provider::{Provider, ProviderError};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during embedding generation.
#[derive(Debug, Error)]
pub enum EmbedderError {
    /// The provider API returned an error.
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The provider returned a different number of vectors than inputs.
    ///
    /// Accepting such a response would break the record/embedding pairing.
    #[error("expected {expected} embeddings, got {got}")]
    CountMismatch { expected: usize, got: usize },
}

/// Result type for embedding operations.
pub type Result<T> = std::result::Result<T, EmbedderError>;

/// Generates vector embeddings for text using provider embedding models.
///
/// Similar texts map to vectors with high cosine similarity, which is what
/// the retriever ranks on.
#[derive(Clone)]
pub struct Embedder {
    provider: Arc<dyn Provider>,
    model: String,
    batch_size: usize,
}

impl Embedder {
    pub fn new(provider: Arc<dyn Provider>, config: &EmbeddingConfig) -> Self {
        Self {
            provider,
            model: config.model.clone(),
            batch_size: config.batch_size.max(1),
        }
    }

    /// Generates a vector embedding for a single text.
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut embeddings = self.embed_batch(&[text]).await?;
        embeddings.pop().ok_or(EmbedderError::CountMismatch { expected: 1, got: 0 })
    }

    /// Embeds many texts, splitting them into provider-sized batches.
    ///
    /// The output has exactly one vector per input, in input order. Any
    /// failing batch fails the whole call, so callers never see a partial
    /// result.
    pub async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut embeddings = Vec::with_capacity(texts.len());

        for batch in texts.chunks(self.batch_size) {
            debug!(model = %self.model, size = batch.len(), "Embedding batch");
            let vectors = self.provider.embed_batch(batch, &self.model).await?;
            if vectors.len() != batch.len() {
                return Err(EmbedderError::CountMismatch {
                    expected: batch.len(),
                    got: vectors.len(),
                });
            }
            embeddings.extend(vectors);
        }

        Ok(embeddings)
    }
}

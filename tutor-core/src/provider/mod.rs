//! LLM provider abstraction layer.
//!
//! This module defines a common interface for LLM backends that provide
//! chat completions and embeddings.

mod types;
pub mod openai;

// Re-export common types
pub use types::{
    ChatRequest,
    ChatResponse,
    Message,
    Provider,
    ProviderError,
    Result,
};

// Re-export provider implementations
pub use openai::OpenAiProvider;

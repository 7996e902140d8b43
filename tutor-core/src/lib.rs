//! tutor-core - Retrieval-augmented teaching assistant
//!
//! Answers student questions from two pre-scraped corpora (course content
//! and forum posts):
//! - LLM provider abstraction (OpenAI-compatible HTTP API)
//! - Corpus store with precomputed embeddings
//! - RAG retrieval and answer synthesis
//! - Configuration management
//! - HTTP server (`POST /api/`)
//!
//! ## Primary API
//!
//! Build an [`Assistant`] once at startup and share it; the [`server`]
//! module wraps it in an HTTP router.

// Public modules
pub mod answer;
pub mod assistant;
pub mod config;
pub mod corpus;
pub mod provider;
pub mod rag;
pub mod server;

#[cfg(test)]
mod test_support;

// Public exports
pub use answer::{AnswerError, AnswerResponse, Link, Query};
pub use assistant::Assistant;
pub use config::Config;
pub use corpus::{Corpus, CorpusKind, CorpusRecord, CorpusStore};
pub use rag::{Embedder, Retriever};

// Provider exports
pub use provider::{ChatRequest, ChatResponse, Message, OpenAiProvider, Provider, ProviderError};

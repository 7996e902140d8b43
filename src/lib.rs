//! tutor - Retrieval-augmented teaching assistant
//!
//! This is the convenience wrapper crate that re-exports `tutor-core`.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use tutor::prelude::*;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load_or_default();
//! let provider = Arc::new(OpenAiProvider::new(&config.llm)?);
//! let assistant = Assistant::build(config, provider).await;
//!
//! let response = assistant.answer(&Query::new("How do I submit GA1?")).await?;
//! println!("{}", response.answer);
//! # Ok(())
//! # }
//! ```

// Re-export core
pub use tutor_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use tutor_core::{
        AnswerResponse, Assistant, Config, CorpusStore, Link, OpenAiProvider, Provider, Query,
    };
}

//! Generation side of the RAG pipeline: prompt, LLM call, response shaping.

mod assembler;
mod prompt;
mod synthesizer;
mod types;

pub use assembler::{
    assemble, decode_image, LinkSet, ERROR_INFO_TEXT, ERROR_INFO_URL, GENERAL_INFO_TEXT,
    GENERAL_INFO_URL,
};
pub use prompt::{build_context, build_prompt, NO_CONTEXT, SYSTEM_MESSAGE};
pub use synthesizer::{Synthesizer, FALLBACK_ANSWER};
pub use types::{AnswerResponse, Link, Query};

pub(crate) use synthesizer::fallback;

use thiserror::Error;

/// Errors surfaced to the caller of the answer pipeline.
///
/// External service failures are absorbed into a fallback answer, so bad
/// input is the only thing that can fail a request.
#[derive(Debug, Error)]
pub enum AnswerError {
    #[error("Invalid base64 image: {0}")]
    InvalidImage(#[from] base64::DecodeError),
}

pub type Result<T> = std::result::Result<T, AnswerError>;
